//! Simple ray tracer example.
//!
//! Renders the three-material sphere scene and saves it as PPM.

use std::sync::Arc;

use lumen_renderer::{
    output, Camera, Color, Dielectric, HittableList, Lambertian, Material, Metal, Point3, Sphere,
    Vec3,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    println!("Lumen Ray Tracer - Simple Example");
    println!("=================================");

    let world = build_scene();
    println!("Created {} objects", world.len());

    let mut camera = Camera::new()
        .with_image(16.0 / 9.0, 400)
        .with_quality(50, 10)
        .with_position(
            Point3::new(-2.0, 2.0, 1.0), // look_from
            Point3::new(0.0, 0.0, -1.0), // look_at
            Vec3::new(0.0, 1.0, 0.0),    // vup
        )
        .with_lens(20.0, 10.0, 3.4);

    let mut rng = StdRng::seed_from_u64(42);

    let start = std::time::Instant::now();
    let image = camera.render(&world, &mut rng);
    println!("Rendered {}x{} in {:?}", image.width, image.height, start.elapsed());

    let filename = "output.ppm";
    output::save_ppm(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> HittableList {
    let ground = Arc::new(Material::from(Lambertian::new(Color::new(0.8, 0.8, 0.0))));
    let center = Arc::new(Material::from(Lambertian::new(Color::new(0.1, 0.2, 0.5))));
    let left = Arc::new(Material::from(Dielectric::new(1.5)));
    let bubble = Arc::new(Material::from(Dielectric::new(1.0 / 1.5)));
    let right = Arc::new(Material::from(Metal::new(Color::new(0.8, 0.6, 0.2), 1.0)));

    let mut world = HittableList::new();
    world.add(Sphere::new(Point3::new(0.0, -100.5, -1.0), 100.0, ground));
    world.add(Sphere::new(Point3::new(0.0, 0.0, -1.2), 0.5, center));
    world.add(Sphere::new(Point3::new(-1.0, 0.0, -1.0), 0.5, left));
    world.add(Sphere::new(Point3::new(-1.0, 0.0, -1.0), 0.4, bubble));
    world.add(Sphere::new(Point3::new(1.0, 0.0, -1.0), 0.5, right));
    world
}
