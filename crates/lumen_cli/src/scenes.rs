//! Built-in scenes.
//!
//! Each scene pairs a world with the camera it was composed for. Scenes are
//! assembled in code; there is no scene file format.

use std::sync::Arc;

use clap::ValueEnum;
use lumen_math::sampling::{gen_f64, gen_range_f64, random_vec3, random_vec3_range};
use lumen_renderer::{
    Camera, Color, Dielectric, HittableList, Lambertian, Material, Metal, Point3, Sphere, Vec3,
};
use rand::RngCore;

/// A world and the camera that frames it.
pub struct Scene {
    pub world: HittableList,
    pub camera: Camera,
}

/// Scenes selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// One diffuse sphere resting on a large ground sphere
    Simple,
    /// Diffuse, hollow glass and fuzzed metal spheres side by side
    Spheres,
    /// Hundreds of small random spheres around three large ones
    Cover,
}

impl SceneKind {
    /// Build the scene. Only `Cover` draws from `rng`.
    pub fn build(self, rng: &mut dyn RngCore) -> Scene {
        match self {
            SceneKind::Simple => simple(),
            SceneKind::Spheres => spheres(),
            SceneKind::Cover => cover(rng),
        }
    }
}

fn lambertian(albedo: Color) -> Arc<Material> {
    Arc::new(Lambertian::new(albedo).into())
}

fn metal(albedo: Color, fuzz: f64) -> Arc<Material> {
    Arc::new(Metal::new(albedo, fuzz).into())
}

fn dielectric(ior: f64) -> Arc<Material> {
    Arc::new(Dielectric::new(ior).into())
}

/// Sphere of radius 0.5 at (0, 0, -1) on a radius 100 ground sphere.
pub fn simple() -> Scene {
    let mut world = HittableList::new();
    world.add(Sphere::new(
        Point3::new(0.0, 0.0, -1.0),
        0.5,
        lambertian(Color::new(0.5, 0.5, 0.5)),
    ));
    world.add(Sphere::new(
        Point3::new(0.0, -100.5, -1.0),
        100.0,
        lambertian(Color::new(0.5, 0.5, 0.5)),
    ));

    let camera = Camera::new()
        .with_image(16.0 / 9.0, 400)
        .with_quality(10, 10)
        .with_position(Point3::ZERO, Point3::new(0.0, 0.0, -1.0), Vec3::Y)
        .with_lens(90.0, 0.0, 1.0);

    Scene { world, camera }
}

/// Three material showcase.
pub fn spheres() -> Scene {
    let ground = lambertian(Color::new(0.8, 0.8, 0.0));
    let center = lambertian(Color::new(0.1, 0.2, 0.5));
    let glass = dielectric(1.5);
    // Air inside glass: relative index is the reciprocal
    let bubble = dielectric(1.0 / 1.5);
    let gold = metal(Color::new(0.8, 0.6, 0.2), 1.0);

    let mut world = HittableList::new();
    world.add(Sphere::new(Point3::new(0.0, -100.5, -1.0), 100.0, ground));
    world.add(Sphere::new(Point3::new(0.0, 0.0, -1.2), 0.5, center));
    world.add(Sphere::new(Point3::new(-1.0, 0.0, -1.0), 0.5, glass));
    world.add(Sphere::new(Point3::new(-1.0, 0.0, -1.0), 0.4, bubble));
    world.add(Sphere::new(Point3::new(1.0, 0.0, -1.0), 0.5, gold));

    let camera = Camera::new()
        .with_image(16.0 / 9.0, 400)
        .with_quality(100, 50)
        .with_position(Point3::new(-2.0, 2.0, 1.0), Point3::new(0.0, 0.0, -1.0), Vec3::Y)
        .with_lens(20.0, 10.0, 3.4);

    Scene { world, camera }
}

/// Random field of small spheres around three large feature spheres.
pub fn cover(rng: &mut dyn RngCore) -> Scene {
    let mut world = HittableList::new();

    world.add(Sphere::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        lambertian(Color::new(0.5, 0.5, 0.5)),
    ));

    // Shared by every small glass sphere
    let glass = dielectric(1.5);

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = gen_f64(rng);
            let center = Point3::new(
                a as f64 + 0.9 * gen_f64(rng),
                0.2,
                b as f64 + 0.9 * gen_f64(rng),
            );

            // Keep clear of the large metal sphere
            if (center - Point3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let material = if choose_mat < 0.8 {
                lambertian(random_vec3(rng) * random_vec3(rng))
            } else if choose_mat < 0.95 {
                metal(random_vec3_range(rng, 0.5, 1.0), gen_range_f64(rng, 0.0, 0.5))
            } else {
                glass.clone()
            };
            world.add(Sphere::new(center, 0.2, material));
        }
    }

    world.add(Sphere::new(Point3::new(0.0, 1.0, 0.0), 1.0, glass));
    world.add(Sphere::new(
        Point3::new(-4.0, 1.0, 0.0),
        1.0,
        lambertian(Color::new(0.4, 0.2, 0.1)),
    ));
    world.add(Sphere::new(
        Point3::new(4.0, 1.0, 0.0),
        1.0,
        metal(Color::new(0.7, 0.6, 0.5), 0.0),
    ));

    let camera = Camera::new()
        .with_image(16.0 / 9.0, 1200)
        .with_quality(10, 50)
        .with_position(Point3::new(13.0, 2.0, 3.0), Point3::ZERO, Vec3::Y)
        .with_lens(20.0, 0.6, 10.0);

    Scene { world, camera }
}
