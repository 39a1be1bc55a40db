//! Lumen math - vectors, intervals, rays and random sampling.
//!
//! Everything is double precision. `Vec3`, `Point3` and `Color` share the
//! same representation (`glam::DVec3`); the aliases only document intent.

// Re-export glam for convenience
pub use glam::DVec3;

mod interval;
mod ray;
pub mod sampling;

pub use interval::Interval;
pub use ray::Ray;

/// Displacement or direction in 3D space.
pub type Vec3 = DVec3;

/// Position in 3D space.
pub type Point3 = DVec3;

/// Linear RGB color, channels nominally in [0, 1].
pub type Color = DVec3;

/// Components below this magnitude count as zero in [`Vec3Ext::near_zero`].
pub const NEAR_ZERO_EPSILON: f64 = 1e-8;

/// Ray tracing helpers glam does not provide.
pub trait Vec3Ext {
    /// True if every component is within `1e-8` of zero.
    fn near_zero(&self) -> bool;

    /// `v / |v|`. Produces NaN for the zero vector; callers guarantee a
    /// non-degenerate input.
    fn unit_vector(&self) -> Self;
}

impl Vec3Ext for DVec3 {
    #[inline]
    fn near_zero(&self) -> bool {
        self.x.abs() < NEAR_ZERO_EPSILON
            && self.y.abs() < NEAR_ZERO_EPSILON
            && self.z.abs() < NEAR_ZERO_EPSILON
    }

    #[inline]
    fn unit_vector(&self) -> Self {
        *self / self.length()
    }
}

/// Convert degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}
