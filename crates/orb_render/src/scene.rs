//! Scene container and nearest-hit query.

use crate::sphere::{HitInfo, Sphere, T_MIN};
use crate::Ray;
use orb_math::Interval;

/// An ordered collection of spheres.
///
/// Read-only during rendering; safe to share across worker threads.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    spheres: Vec<Sphere>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere to the scene.
    pub fn add(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Find the nearest intersection along `ray`, if any.
    ///
    /// Linear scan over all spheres, shrinking the accepted parameter
    /// range as closer hits are found.
    pub fn closest_hit(&self, ray: &Ray) -> Option<HitInfo> {
        let mut closest: Option<HitInfo> = None;
        let mut range = Interval::new(T_MIN, f32::INFINITY);

        for sphere in &self.spheres {
            if let Some(hit) = sphere.intersect(ray, range) {
                range.max = hit.distance;
                closest = Some(hit);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Material, Vec3};

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(scene.closest_hit(&ray).is_none());
    }

    #[test]
    fn test_nearest_hit_wins() {
        let near_mat = Material::lambert(Color::new(1.0, 0.0, 0.0));
        let far_mat = Material::lambert(Color::new(0.0, 1.0, 0.0));

        let mut scene = Scene::new();
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, 10.0), 1.0, far_mat).unwrap());
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, near_mat).unwrap());

        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let hit = scene.closest_hit(&ray).unwrap();

        assert!((hit.distance - 4.0).abs() < 1e-4);
        assert_eq!(hit.material, near_mat);
    }

    #[test]
    fn test_order_does_not_matter() {
        let mut a = Scene::new();
        let mut b = Scene::new();
        let s1 = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, Material::default()).unwrap();
        let s2 = Sphere::new(Vec3::new(0.0, 0.0, 8.0), 1.0, Material::default()).unwrap();
        a.add(s1);
        a.add(s2);
        b.add(s2);
        b.add(s1);

        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let ha = a.closest_hit(&ray).unwrap();
        let hb = b.closest_hit(&ray).unwrap();
        assert_eq!(ha.distance, hb.distance);
    }
}
