//! Core ray tracing loop.
//!
//! Implements Monte Carlo ray tracing with:
//! - Recursive ray tracing with configurable depth
//! - Anti-aliasing via multi-sampling
//! - Gamma correction and 8-bit quantization
//!
//! Pixels are produced row-major, top row first. The loop never writes to
//! an output stream; callers observe progress through [`Pixels`] or the
//! scanline callback of [`render_with_progress`].

use crate::{Camera, Hittable};
use lumen_math::{Color, Interval, Ray, Vec3Ext};
use rand::RngCore;
use std::time::Instant;

/// Lower bound of the valid hit interval. Keeps scattered rays from
/// re-hitting the surface they start on due to round-off.
pub const SHADOW_ACNE_EPSILON: f64 = 0.001;

/// One 8-bit RGB pixel.
pub type Rgb8 = [u8; 3];

const INTENSITY: Interval = Interval::new(0.0, 0.999);

/// Compute the color seen by a ray.
///
/// Returns black once `depth` reaches zero; otherwise the attenuation of
/// each scatter multiplies the color of the next bounce.
pub fn ray_color(ray: &Ray, world: &dyn Hittable, depth: u32, rng: &mut dyn RngCore) -> Color {
    // If we've exceeded max depth, return black (no light)
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(rec) = world.hit(ray, Interval::new(SHADOW_ACNE_EPSILON, f64::INFINITY)) else {
        return sky_gradient(ray);
    };

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => result.attenuation * ray_color(&result.scattered, world, depth - 1, rng),
        // Ray was absorbed
        None => Color::ZERO,
    }
}

/// Vertical white-to-blue background gradient.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().unit_vector();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    (1.0 - a) * white + a * blue
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert one linear channel to an 8-bit value.
#[inline]
fn channel_to_u8(linear: f64) -> u8 {
    let linear = Interval::new(0.0, 1.0).clamp(linear);
    (256.0 * INTENSITY.clamp(linear_to_gamma(linear))) as u8
}

/// Convert an averaged linear color to 8-bit RGB.
pub fn color_to_rgb8(color: Color) -> Rgb8 {
    [
        channel_to_u8(color.x),
        channel_to_u8(color.y),
        channel_to_u8(color.z),
    ]
}

/// Render a single pixel with multi-sampling.
///
/// Returns the averaged linear color (before gamma).
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..camera.samples_per_pixel {
        // Camera.get_ray already adds random offset for anti-aliasing
        let ray = camera.get_ray(x, y, rng);
        pixel_color += ray_color(&ray, world, camera.max_depth, rng);
    }

    pixel_color * camera.samples_scale()
}

/// Iterator over the quantized pixels of an initialized camera, in render
/// order.
pub struct Pixels<'a> {
    camera: &'a Camera,
    world: &'a dyn Hittable,
    rng: &'a mut dyn RngCore,
    x: u32,
    y: u32,
}

impl<'a> Pixels<'a> {
    /// Create the iterator. The camera must already be initialized.
    pub fn new(camera: &'a Camera, world: &'a dyn Hittable, rng: &'a mut dyn RngCore) -> Self {
        Self {
            camera,
            world,
            rng,
            x: 0,
            y: 0,
        }
    }

    fn remaining(&self) -> usize {
        let width = self.camera.image_width as usize;
        let total = width * self.camera.image_height() as usize;
        let done = self.y as usize * width + self.x as usize;
        total.saturating_sub(done)
    }
}

impl Iterator for Pixels<'_> {
    type Item = Rgb8;

    fn next(&mut self) -> Option<Rgb8> {
        if self.camera.image_width == 0 || self.y >= self.camera.image_height() {
            return None;
        }

        let color = render_pixel(self.camera, self.world, self.x, self.y, &mut *self.rng);

        self.x += 1;
        if self.x == self.camera.image_width {
            self.x = 0;
            self.y += 1;
        }

        Some(color_to_rgb8(color))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

/// Progress report sent after each finished scanline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanlineProgress {
    /// Row that was just completed (0 = top)
    pub row: u32,
    /// Rows still to render
    pub rows_remaining: u32,
    /// Total rows in the image
    pub total_rows: u32,
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgb8>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 3]; (width as usize) * (height as usize)],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Rgb8 {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Rgb8) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Flatten to interleaved RGB bytes (for display or saving).
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Render the entire scene to an image buffer.
///
/// This is a simple single-threaded renderer; the camera must already be
/// initialized.
pub fn render(camera: &Camera, world: &dyn Hittable, rng: &mut dyn RngCore) -> ImageBuffer {
    render_with_progress(camera, world, rng, |_| {})
}

/// Render the entire scene, calling `on_scanline` after every row.
pub fn render_with_progress(
    camera: &Camera,
    world: &dyn Hittable,
    rng: &mut dyn RngCore,
    mut on_scanline: impl FnMut(ScanlineProgress),
) -> ImageBuffer {
    let width = camera.image_width;
    let height = camera.image_height();
    let mut image = ImageBuffer::new(width, height);

    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}",
        width,
        height,
        camera.samples_per_pixel,
        camera.max_depth
    );
    let start = Instant::now();

    for y in 0..height {
        for x in 0..width {
            let color = render_pixel(camera, world, x, y, rng);
            image.set(x, y, color_to_rgb8(color));
        }

        log::trace!("Scanline {} of {} done", y + 1, height);
        on_scanline(ScanlineProgress {
            row: y,
            rows_remaining: height - y - 1,
            total_rows: height,
        });
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HittableList, Lambertian, Material, Sphere};
    use lumen_math::{Point3, Vec3};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn single_sphere_world() -> HittableList {
        HittableList::from_object(Sphere::new(
            Point3::new(0.0, 0.0, -1.0),
            0.5,
            Arc::new(Material::from(Lambertian::new(Color::new(0.5, 0.5, 0.5)))),
        ))
    }

    #[test]
    fn test_sky_gradient_endpoints() {
        let up = sky_gradient(&Ray::new(Point3::ZERO, Vec3::Y));
        assert!((up - Color::new(0.5, 0.7, 1.0)).length() < 1e-12);

        let down = sky_gradient(&Ray::new(Point3::ZERO, Vec3::NEG_Y));
        assert!((down - Color::ONE).length() < 1e-12);
    }

    #[test]
    fn test_miss_returns_background() {
        let world = HittableList::new();
        let mut rng = StdRng::seed_from_u64(0);

        let up = Ray::new(Point3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        let color = ray_color(&up, &world, 10, &mut rng);
        assert!((color - Color::new(0.5, 0.7, 1.0)).length() < 1e-12);
    }

    #[test]
    fn test_zero_radius_sphere_shows_background() {
        let world = HittableList::from_object(Sphere::new(
            Point3::new(0.0, 0.0, -1.0),
            0.0,
            Arc::new(Material::from(Lambertian::new(Color::splat(0.5)))),
        ));
        let mut rng = StdRng::seed_from_u64(0);

        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let color = ray_color(&ray, &world, 10, &mut rng);
        assert!((color - sky_gradient(&ray)).length() < 1e-12);
    }

    #[test]
    fn test_depth_zero_is_black() {
        let world = single_sphere_world();
        let mut rng = StdRng::seed_from_u64(0);

        let toward_sphere = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let toward_sky = Ray::new(Point3::ZERO, Vec3::Y);
        assert_eq!(ray_color(&toward_sphere, &world, 0, &mut rng), Color::ZERO);
        assert_eq!(ray_color(&toward_sky, &world, 0, &mut rng), Color::ZERO);
    }

    #[test]
    fn test_single_bounce_hit_is_black() {
        // With one bounce left the scattered ray hits the depth cutoff
        let world = single_sphere_world();
        let mut rng = StdRng::seed_from_u64(0);
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert_eq!(ray_color(&ray, &world, 1, &mut rng), Color::ZERO);
    }

    #[test]
    fn test_diffuse_hit_is_attenuated_sky() {
        let world = single_sphere_world();
        let mut rng = StdRng::seed_from_u64(4);
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // The front of a lone sphere scatters straight back to the sky, so
        // every channel is albedo times a gradient value.
        for _ in 0..50 {
            let color = ray_color(&ray, &world, 2, &mut rng);
            assert!(color.x >= 0.25 - 1e-12 && color.x <= 0.5 + 1e-12);
            assert!(color.z <= 0.5 + 1e-12);
        }
    }

    #[test]
    fn test_linear_to_gamma() {
        assert_eq!(linear_to_gamma(0.0), 0.0);
        assert_eq!(linear_to_gamma(-0.5), 0.0);
        assert!((linear_to_gamma(1.0) - 1.0).abs() < 1e-12);
        assert!((linear_to_gamma(0.25) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_color_to_rgb8() {
        assert_eq!(color_to_rgb8(Color::ZERO), [0, 0, 0]);
        assert_eq!(color_to_rgb8(Color::ONE), [255, 255, 255]);
        // Out of range input saturates
        assert_eq!(color_to_rgb8(Color::new(4.0, -1.0, f64::NAN)), [255, 0, 0]);
        // 0.25 -> gamma 0.5 -> floor(128.0)
        assert_eq!(color_to_rgb8(Color::splat(0.25)), [128, 128, 128]);
    }

    #[test]
    fn test_render_pixel_hits_sphere() {
        let world = single_sphere_world();
        let mut camera = Camera::new().with_image(1.0, 11).with_quality(4, 5);
        camera.initialize();

        let mut rng = StdRng::seed_from_u64(42);
        let color = render_pixel(&camera, &world, 5, 5, &mut rng);

        // Diffuse grey sphere never reaches the bright background colors
        assert!(color.length() > 0.0);
        assert!(color.x < 0.5 + 1e-12);
    }

    #[test]
    fn test_pixels_iterator_order_and_len() {
        let world = HittableList::new();
        let mut camera = Camera::new().with_image(2.0, 6).with_quality(1, 2);
        camera.initialize();

        let mut rng = StdRng::seed_from_u64(1);
        let pixels = Pixels::new(&camera, &world, &mut rng);
        assert_eq!(pixels.size_hint(), (18, Some(18)));

        let pixels: Vec<Rgb8> = pixels.collect();
        assert_eq!(pixels.len(), 18);
        // Empty scene: top row is bluer than the bottom row
        assert!(pixels[0][0] < pixels[17][0]);
    }

    #[test]
    fn test_render_matches_iterator() {
        let world = single_sphere_world();
        let mut camera = Camera::new().with_image(4.0 / 3.0, 8).with_quality(2, 4);
        camera.initialize();

        let mut rng = StdRng::seed_from_u64(9);
        let image = render(&camera, &world, &mut rng);

        let mut rng = StdRng::seed_from_u64(9);
        let streamed: Vec<Rgb8> = Pixels::new(&camera, &world, &mut rng).collect();

        assert_eq!(image.pixels, streamed);
    }

    #[test]
    fn test_render_with_progress_reports_every_row() {
        let world = HittableList::new();
        let mut camera = Camera::new().with_image(2.0, 8).with_quality(1, 1);
        camera.initialize();

        let mut rng = StdRng::seed_from_u64(2);
        let mut reports = Vec::new();
        let image = render_with_progress(&camera, &world, &mut rng, |p| reports.push(p));

        assert_eq!(image.height, 4);
        assert_eq!(reports.len(), 4);
        assert_eq!(reports[0].row, 0);
        assert_eq!(reports[0].rows_remaining, 3);
        assert_eq!(reports[3].rows_remaining, 0);
        assert!(reports.iter().all(|p| p.total_rows == 4));
    }

    #[test]
    fn test_image_buffer_get_set() {
        let mut image = ImageBuffer::new(3, 2);
        image.set(2, 1, [10, 20, 30]);

        assert_eq!(image.get(2, 1), [10, 20, 30]);
        assert_eq!(image.get(0, 0), [0, 0, 0]);
        let bytes = image.to_rgb_bytes();
        assert_eq!(bytes.len(), 18);
        assert_eq!(&bytes[15..], &[10, 20, 30]);
    }
}
