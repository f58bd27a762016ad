//! Surface material model.
//!
//! Materials are plain data: a diffuse albedo, an emission term, and a
//! mirror lobe selected with probability `specular_chance`. The integrator
//! interprets these fields; there is no per-material scattering code.

use orb_math::Vec3;

/// Color type alias (linear RGB, typically 0-1 for albedo, unbounded for
/// emission)
pub type Color = Vec3;

/// Surface properties of a sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Diffuse albedo, channel-wise in [0, 1] by convention
    pub diffuse: Color,
    /// Emitted radiance, non-negative and unbounded
    pub emission: Color,
    /// Tint applied to mirror reflections
    pub specular: Color,
    /// Probability of sampling the mirror lobe instead of the diffuse lobe
    pub specular_chance: f32,
}

impl Material {
    /// A purely diffuse surface with the given albedo.
    pub fn lambert(albedo: Color) -> Self {
        Self {
            diffuse: albedo,
            ..Self::default()
        }
    }

    /// A light source. Emits `radiance` and reflects nothing.
    pub fn emissive(radiance: Color) -> Self {
        Self {
            diffuse: Color::ZERO,
            emission: radiance,
            ..Self::default()
        }
    }

    /// A surface that mixes a mirror lobe into a diffuse base.
    ///
    /// `chance` is clamped to [0, 1].
    pub fn mirror(albedo: Color, tint: Color, chance: f32) -> Self {
        Self {
            diffuse: albedo,
            emission: Color::ZERO,
            specular: tint,
            specular_chance: chance.clamp(0.0, 1.0),
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse: Color::splat(0.5),
            emission: Color::ZERO,
            specular: Color::ZERO,
            specular_chance: 0.0,
        }
    }
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emissive_has_no_reflectance() {
        let light = Material::emissive(Color::new(5.0, 5.0, 5.0));
        assert_eq!(light.diffuse, Color::ZERO);
        assert_eq!(light.specular, Color::ZERO);
        assert_eq!(light.specular_chance, 0.0);
    }

    #[test]
    fn test_mirror_clamps_chance() {
        let m = Material::mirror(Color::splat(0.5), Color::ONE, 1.7);
        assert_eq!(m.specular_chance, 1.0);
    }

    #[test]
    fn test_reflect() {
        // 45-degree incidence on a floor plane
        let v = Vec3::new(1.0, -1.0, 0.0).normalize();
        let n = Vec3::Y;
        let r = reflect(v, n);
        assert!((r - Vec3::new(1.0, 1.0, 0.0).normalize()).length() < 1e-6);
    }

    #[test]
    fn test_reflect_head_on() {
        let r = reflect(Vec3::NEG_Y, Vec3::Y);
        assert!((r - Vec3::Y).length() < 1e-6);
    }
}
