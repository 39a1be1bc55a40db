//! Lumen renderer - CPU ray tracing.
//!
//! A stochastic recursive ray tracer for scenes of spheres with diffuse,
//! metal and glass materials. Intersection is a linear scan over the scene
//! and rendering is single-threaded; every random draw comes from the
//! caller's `RngCore`, so a seeded generator reproduces an image exactly.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use lumen_renderer::{Camera, HittableList, Lambertian, Material, Sphere, Point3, Color};
//! use rand::SeedableRng;
//!
//! let ground = Arc::new(Material::from(Lambertian::new(Color::new(0.8, 0.8, 0.0))));
//! let mut world = HittableList::new();
//! world.add(Sphere::new(Point3::new(0.0, -100.5, -1.0), 100.0, ground.clone()));
//! world.add(Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, ground));
//!
//! let mut camera = Camera::new().with_image(16.0 / 9.0, 400).with_quality(50, 10);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let image = camera.render(&world, &mut rng);
//! lumen_renderer::output::save_image(&image, "out.ppm").unwrap();
//! ```

mod camera;
mod hittable;
mod material;
pub mod output;
mod renderer;
mod sphere;

pub use camera::{Camera, CameraError};
pub use hittable::{HitRecord, Hittable, HittableList, Primitive};
pub use material::{reflect, reflectance, refract, Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use output::{save_image, OutputError};
pub use renderer::{
    color_to_rgb8, linear_to_gamma, ray_color, render, render_pixel, render_with_progress,
    sky_gradient, ImageBuffer, Pixels, Rgb8, ScanlineProgress, SHADOW_ACNE_EPSILON,
};
pub use sphere::Sphere;

/// Re-export the math types from lumen_math
pub use lumen_math::{Color, Interval, Point3, Ray, Vec3, Vec3Ext};
