//! Hittable trait and HitRecord for ray-object intersection.

use crate::{Material, Sphere};
use lumen_math::{Interval, Point3, Ray, Vec3};

/// Record of a ray-object intersection.
#[derive(Debug, Clone)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Point3,
    /// Unit surface normal at intersection (always points against ray)
    pub normal: Vec3,
    /// Material of the surface that was hit
    pub material: &'a Material,
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
}

impl<'a> HitRecord<'a> {
    /// Build a record from a hit at parameter `t`.
    ///
    /// `outward_normal` must be unit length; it is flipped as needed so the
    /// stored normal opposes the ray.
    pub fn new(ray: &Ray, t: f64, outward_normal: Vec3, material: &'a Material) -> Self {
        let mut rec = Self {
            p: ray.at(t),
            normal: outward_normal,
            material,
            t,
            front_face: true,
        };
        rec.set_face_normal(ray, outward_normal);
        rec
    }

    /// Set the face normal based on ray direction and outward normal.
    ///
    /// The normal is always stored pointing against the ray direction,
    /// so we need to track whether we hit the front or back face.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        // If the ray and normal point in the same direction, we're inside
        self.front_face = ray.direction().dot(outward_normal) < 0.0;

        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object with `t` strictly inside `ray_t`.
    ///
    /// Returns the hit record on success, `None` on a miss.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}

/// Closed set of scene geometry.
#[derive(Debug, Clone)]
pub enum Primitive {
    Sphere(Sphere),
}

impl Hittable for Primitive {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        match self {
            Primitive::Sphere(sphere) => sphere.hit(ray, ray_t),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

/// A list of hittable objects, intersected by linear scan.
#[derive(Debug, Clone, Default)]
pub struct HittableList {
    objects: Vec<Primitive>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Create a list holding a single object.
    pub fn from_object(object: impl Into<Primitive>) -> Self {
        let mut list = Self::new();
        list.add(object);
        list
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: impl Into<Primitive>) {
        self.objects.push(object.into());
    }

    /// Clear all objects from the list.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Objects in insertion order.
    pub fn objects(&self) -> &[Primitive] {
        &self.objects
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest = None;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            // Later candidates must beat the closest hit found so far
            if let Some(rec) = object.hit(ray, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Lambertian;
    use std::sync::Arc;

    fn grey() -> Arc<Material> {
        Arc::new(Material::from(Lambertian::new(Vec3::splat(0.5))))
    }

    #[test]
    fn test_set_face_normal_front() {
        let mat = Material::from(Lambertian::new(Vec3::ONE));
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = HitRecord::new(&ray, 1.0, Vec3::Z, &mat);

        assert!(rec.front_face);
        assert_eq!(rec.normal, Vec3::Z);
        assert_eq!(rec.p, Point3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_set_face_normal_back() {
        let mat = Material::from(Lambertian::new(Vec3::ONE));
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = HitRecord::new(&ray, 1.0, Vec3::NEG_Z, &mat);

        assert!(!rec.front_face);
        assert_eq!(rec.normal, Vec3::Z);
        assert!(ray.direction().dot(rec.normal) <= 0.0);
    }

    #[test]
    fn test_list_returns_closest_hit() {
        let mat = grey();
        let mut world = HittableList::new();
        // Insert the far sphere first so order does not decide the result
        world.add(Sphere::new(Point3::new(0.0, 0.0, -5.0), 0.5, mat.clone()));
        world.add(Sphere::new(Point3::new(0.0, 0.0, -2.0), 0.5, mat));

        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = world
            .hit(&ray, Interval::new(0.001, f64::INFINITY))
            .expect("ray should hit the near sphere");

        assert!((rec.t - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_list_closest_hit_is_order_independent() {
        let mat = grey();
        let near = Sphere::new(Point3::new(0.0, 0.0, -2.0), 0.5, mat.clone());
        let far = Sphere::new(Point3::new(0.0, 0.0, -5.0), 0.5, mat);

        let mut a = HittableList::new();
        a.add(near.clone());
        a.add(far.clone());
        let mut b = HittableList::new();
        b.add(far);
        b.add(near);

        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let ray_t = Interval::new(0.001, f64::INFINITY);
        let ta = a.hit(&ray, ray_t).map(|rec| rec.t);
        let tb = b.hit(&ray, ray_t).map(|rec| rec.t);

        assert_eq!(ta, tb);
    }

    #[test]
    fn test_list_miss() {
        let mut world = HittableList::from_object(Sphere::new(
            Point3::new(0.0, 5.0, -1.0),
            0.5,
            grey(),
        ));
        world.add(Sphere::new(Point3::new(5.0, 0.0, -1.0), 0.5, grey()));

        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(world.hit(&ray, Interval::new(0.001, f64::INFINITY)).is_none());
    }

    #[test]
    fn test_empty_list_misses() {
        let world = HittableList::new();
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert!(world.is_empty());
        assert!(world.hit(&ray, Interval::UNIVERSE).is_none());
    }

    #[test]
    fn test_list_add_and_clear() {
        let mut world = HittableList::new();
        world.add(Sphere::new(Point3::ZERO, 1.0, grey()));
        world.add(Sphere::new(Point3::ONE, 1.0, grey()));
        assert_eq!(world.len(), 2);

        world.clear();
        assert!(world.is_empty());
    }
}
