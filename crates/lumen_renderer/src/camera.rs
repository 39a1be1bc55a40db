//! Camera for ray generation.
//!
//! The camera is configured through its public fields (or the `with_*`
//! builders), then [`Camera::initialize`] derives the viewport geometry
//! once. Rendering only reads the derived state.

use crate::renderer::{self, ImageBuffer, ScanlineProgress};
use crate::Hittable;
use lumen_math::sampling::{random_in_unit_disk, sample_square};
use lumen_math::{degrees_to_radians, Point3, Ray, Vec3, Vec3Ext};
use rand::RngCore;
use thiserror::Error;

/// Camera settings that cannot produce a valid image.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CameraError {
    #[error("Image width must be at least 1 pixel")]
    ZeroWidth,

    #[error("Samples per pixel must be at least 1")]
    ZeroSamples,

    #[error("Max depth must be at least 1")]
    ZeroDepth,

    #[error("Invalid aspect ratio: {0}")]
    InvalidAspectRatio(f64),

    #[error("Vertical field of view must be in (0, 180) degrees, got {0}")]
    InvalidFieldOfView(f64),

    #[error("Focus distance must be positive, got {0}")]
    InvalidFocusDistance(f64),

    #[error("Look-from and look-at are the same point")]
    DegenerateViewDirection,

    #[error("Up vector is parallel to the view direction")]
    DegenerateUpVector,
}

/// Camera for generating rays into the scene.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub aspect_ratio: f64,
    pub image_width: u32,
    pub samples_per_pixel: u32,
    pub max_depth: u32,

    // Camera positioning
    pub vfov: f64, // Vertical field of view in degrees
    pub look_from: Point3,
    pub look_at: Point3,
    pub vup: Vec3,

    // Lens settings
    pub defocus_angle: f64, // Variation angle of rays through each pixel
    pub focus_dist: f64,    // Distance from camera to plane of perfect focus

    // Cached computed values (set by initialize())
    image_height: u32,
    center: Point3,
    pixel00_loc: Point3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    defocus_disk_u: Vec3,
    defocus_disk_v: Vec3,
    samples_scale: f64,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            aspect_ratio: 16.0 / 9.0,
            image_width: 400,
            samples_per_pixel: 10,
            max_depth: 10,
            vfov: 90.0,
            look_from: Point3::ZERO,
            look_at: Point3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            defocus_angle: 0.0,
            focus_dist: 10.0,
            image_height: 0,
            center: Point3::ZERO,
            pixel00_loc: Point3::ZERO,
            pixel_delta_u: Vec3::ZERO,
            pixel_delta_v: Vec3::ZERO,
            u: Vec3::X,
            v: Vec3::Y,
            w: Vec3::Z,
            defocus_disk_u: Vec3::ZERO,
            defocus_disk_v: Vec3::ZERO,
            samples_scale: 0.1,
        }
    }

    /// Set image aspect ratio and width; the height is derived.
    pub fn with_image(mut self, aspect_ratio: f64, image_width: u32) -> Self {
        self.aspect_ratio = aspect_ratio;
        self.image_width = image_width;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples_per_pixel: u32, max_depth: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel;
        self.max_depth = max_depth;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Point3, look_at: Point3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f64, defocus_angle: f64, focus_dist: f64) -> Self {
        self.vfov = vfov;
        self.defocus_angle = defocus_angle;
        self.focus_dist = focus_dist;
        self
    }

    /// Check the settings before a render.
    ///
    /// The render loop itself assumes valid settings and does not call this.
    pub fn validate(&self) -> Result<(), CameraError> {
        if self.image_width == 0 {
            return Err(CameraError::ZeroWidth);
        }
        if self.samples_per_pixel == 0 {
            return Err(CameraError::ZeroSamples);
        }
        if self.max_depth == 0 {
            return Err(CameraError::ZeroDepth);
        }
        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return Err(CameraError::InvalidAspectRatio(self.aspect_ratio));
        }
        if !(self.vfov > 0.0 && self.vfov < 180.0) {
            return Err(CameraError::InvalidFieldOfView(self.vfov));
        }
        if !(self.focus_dist > 0.0 && self.focus_dist.is_finite()) {
            return Err(CameraError::InvalidFocusDistance(self.focus_dist));
        }

        let view = self.look_from - self.look_at;
        if view.near_zero() {
            return Err(CameraError::DegenerateViewDirection);
        }
        if self.vup.cross(view).near_zero() {
            return Err(CameraError::DegenerateUpVector);
        }

        Ok(())
    }

    /// Initialize the camera (must be called before generating rays).
    pub fn initialize(&mut self) {
        self.image_height = ((self.image_width as f64 / self.aspect_ratio).round() as u32).max(1);
        self.samples_scale = 1.0 / self.samples_per_pixel as f64;
        self.center = self.look_from;

        // Calculate viewport dimensions
        let theta = degrees_to_radians(self.vfov);
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * self.focus_dist;
        let viewport_width =
            viewport_height * (self.image_width as f64 / self.image_height as f64);

        // Calculate camera basis vectors
        self.w = (self.look_from - self.look_at).unit_vector();
        self.u = self.vup.cross(self.w).unit_vector();
        self.v = self.w.cross(self.u);

        // Viewport edges; v runs down the image
        let viewport_u = viewport_width * self.u;
        let viewport_v = -viewport_height * self.v;

        self.pixel_delta_u = viewport_u / self.image_width as f64;
        self.pixel_delta_v = viewport_v / self.image_height as f64;

        let viewport_upper_left =
            self.center - self.focus_dist * self.w - viewport_u / 2.0 - viewport_v / 2.0;
        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);

        // Calculate defocus disk basis vectors
        let defocus_radius = self.focus_dist * degrees_to_radians(self.defocus_angle / 2.0).tan();
        self.defocus_disk_u = self.u * defocus_radius;
        self.defocus_disk_v = self.v * defocus_radius;

        log::debug!(
            "Camera initialized: {}x{}, viewport {:.3}x{:.3}, defocus radius {:.4}",
            self.image_width,
            self.image_height,
            viewport_width,
            viewport_height,
            defocus_radius
        );
    }

    /// Generate a ray for pixel (i, j) with random sampling.
    ///
    /// The sample point is jittered within the pixel; with a positive
    /// defocus angle the origin is drawn from the defocus disk.
    pub fn get_ray(&self, i: u32, j: u32, rng: &mut dyn RngCore) -> Ray {
        let offset = sample_square(rng);

        let pixel_sample = self.pixel00_loc
            + ((i as f64) + offset.x) * self.pixel_delta_u
            + ((j as f64) + offset.y) * self.pixel_delta_v;

        let ray_origin = if self.defocus_angle <= 0.0 {
            self.center
        } else {
            self.defocus_disk_sample(rng)
        };

        Ray::new(ray_origin, pixel_sample - ray_origin)
    }

    /// Sample a point on the defocus disk.
    fn defocus_disk_sample(&self, rng: &mut dyn RngCore) -> Point3 {
        let p = random_in_unit_disk(rng);
        self.center + p.x * self.defocus_disk_u + p.y * self.defocus_disk_v
    }

    /// Initialize, then render the whole image.
    pub fn render(&mut self, world: &dyn Hittable, rng: &mut dyn RngCore) -> ImageBuffer {
        self.initialize();
        renderer::render(self, world, rng)
    }

    /// Initialize, then render while reporting each finished scanline.
    pub fn render_with_progress(
        &mut self,
        world: &dyn Hittable,
        rng: &mut dyn RngCore,
        on_scanline: impl FnMut(ScanlineProgress),
    ) -> ImageBuffer {
        self.initialize();
        renderer::render_with_progress(self, world, rng, on_scanline)
    }

    /// Image height derived by the last `initialize()`.
    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Camera center (the look-from point after initialization).
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Get the samples scale factor (1 / samples_per_pixel).
    pub fn samples_scale(&self) -> f64 {
        self.samples_scale
    }

    /// Orthonormal camera basis (u: right, v: up, w: backward).
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.u, self.v, self.w)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
