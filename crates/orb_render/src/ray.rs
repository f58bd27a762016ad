//! Ray type for path tracing.

use crate::RenderError;
use orb_math::Vec3;

/// A ray with origin and direction.
///
/// Direction is expected to be unit length by the time the ray reaches
/// intersection testing; the camera and the integrator both normalize
/// before constructing rays.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
}

impl Ray {
    /// Create a new ray. The direction is taken as-is.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray from an unnormalized direction, rejecting degenerate
    /// directions that would produce NaNs during intersection testing.
    pub fn try_new(origin: Vec3, direction: Vec3) -> Result<Self, RenderError> {
        if direction.length_squared() == 0.0 || !direction.is_finite() {
            return Err(RenderError::DegenerateRay);
        }
        Ok(Self {
            origin,
            direction: direction.normalize(),
        })
    }

    /// Get the ray's origin point.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the ray's direction vector.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Compute a point along the ray at parameter t.
    /// P(t) = origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}
