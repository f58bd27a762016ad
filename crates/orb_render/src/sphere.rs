//! Sphere primitive and ray-sphere intersection.

use crate::{Material, Ray, RenderError};
use orb_math::{Interval, Vec3};

/// Minimum accepted ray parameter. Guards against a bounce ray
/// re-intersecting the surface it just left (shadow acne).
pub(crate) const T_MIN: f32 = 1e-3;

/// Record of a ray-sphere intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitInfo {
    /// Ray parameter at the intersection
    pub distance: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Outward unit surface normal
    pub normal: Vec3,
    /// Material copied from the hit sphere
    pub material: Material,
}

/// A sphere primitive. Immutable once constructed.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// A non-positive or non-finite radius is a configuration error.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Result<Self, RenderError> {
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(RenderError::InvalidRadius { radius });
        }
        Ok(Self {
            center,
            radius,
            material,
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Intersect a ray with this sphere within the given parameter range.
    ///
    /// Solves `a·t² + b·t + c = 0`, trying the nearer root first and
    /// falling back to the farther one when the nearer lies outside
    /// `t_range` (e.g. behind the origin or inside the acne guard).
    pub fn intersect(&self, ray: &Ray, t_range: Interval) -> Option<HitInfo> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let mut t = (-b - sqrtd) / (2.0 * a);
        if !t_range.surrounds(t) {
            t = (-b + sqrtd) / (2.0 * a);
            if !t_range.surrounds(t) {
                return None;
            }
        }

        let point = ray.at(t);
        Some(HitInfo {
            distance: t,
            point,
            normal: (point - self.center).normalize(),
            material: self.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn unit_range() -> Interval {
        Interval::new(T_MIN, f32::INFINITY)
    }

    #[test]
    fn test_head_on_hit_distance_and_normal() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, Material::default()).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hit = sphere.intersect(&ray, unit_range()).unwrap();

        // |eye - center| - radius
        assert!((hit.distance - 4.0).abs() < 1e-4);

        // Normal is parallel to (point - center) and points outward
        let radial = (hit.point - sphere.center()).normalize();
        assert!(hit.normal.cross(radial).length() < 1e-4);
        assert!(hit.normal.dot(radial) > 0.0);
    }

    #[test]
    fn test_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, Material::default()).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);

        assert!(sphere.intersect(&ray, unit_range()).is_none());
    }

    #[test]
    fn test_behind_origin_is_not_a_hit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, Material::default()).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        assert!(sphere.intersect(&ray, unit_range()).is_none());
    }

    #[test]
    fn test_chord_through_center() {
        // Origin exactly on the surface, heading through the center:
        // the near root (t = 0) fails the acne guard, the far root is
        // the full chord length 2r.
        let r = 2.0;
        let sphere = Sphere::new(Vec3::ZERO, r, Material::default()).unwrap();
        for dir in [Vec3::X, Vec3::Y, Vec3::NEG_Z, Vec3::new(1.0, 1.0, 1.0).normalize()] {
            let ray = Ray::new(-r * dir, dir);
            let hit = sphere.intersect(&ray, unit_range()).unwrap();
            assert!((hit.distance - 2.0 * r).abs() < 1e-3, "dir {dir:?}");
        }
    }

    #[test]
    fn test_ray_from_center() {
        let sphere = Sphere::new(Vec3::ZERO, 3.0, Material::default()).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let hit = sphere.intersect(&ray, unit_range()).unwrap();
        assert!((hit.distance - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_hit_copies_material() {
        let mat = Material::lambert(Color::new(0.9, 0.1, 0.1));
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, mat).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hit = sphere.intersect(&ray, unit_range()).unwrap();
        assert_eq!(hit.material, mat);
    }

    #[test]
    fn test_degenerate_radius_rejected() {
        assert!(Sphere::new(Vec3::ZERO, 0.0, Material::default()).is_err());
        assert!(Sphere::new(Vec3::ZERO, -1.0, Material::default()).is_err());
        assert!(Sphere::new(Vec3::ZERO, f32::NAN, Material::default()).is_err());
    }
}
