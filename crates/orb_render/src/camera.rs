//! Camera configuration and ray generation.

use crate::{Ray, RenderError};
use orb_math::{Vec2, Vec3};

const WORLD_UP: Vec3 = Vec3::Y;

/// Camera configuration.
///
/// Plain settings; call [`Camera::basis`] to validate them and obtain a
/// [`CameraBasis`] that generates rays.
#[derive(Debug, Clone)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    /// Background radiance returned for rays that escape the scene
    pub background: Vec3,
    eye: Vec3,
    look_at: Vec3,
    vfov: f32,
}

impl Camera {
    /// Create a camera with default settings.
    pub fn new() -> Self {
        Self {
            image_width: 512,
            image_height: 512,
            background: Vec3::ZERO,
            eye: Vec3::ZERO,
            look_at: Vec3::Z,
            vfov: 60.0,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set eye position and look-at target.
    pub fn with_position(mut self, eye: Vec3, look_at: Vec3) -> Self {
        self.eye = eye;
        self.look_at = look_at;
        self
    }

    /// Set vertical field of view in degrees.
    pub fn with_vfov(mut self, degrees: f32) -> Self {
        self.vfov = degrees;
        self
    }

    /// Set background radiance.
    pub fn with_background(mut self, color: Vec3) -> Self {
        self.background = color;
        self
    }

    /// Build the orthonormal viewing frame.
    ///
    /// Fails when the eye coincides with the look-at target or the view
    /// direction is parallel to world up, both of which would produce
    /// NaN ray directions.
    pub fn basis(&self) -> Result<CameraBasis, RenderError> {
        let view = self.look_at - self.eye;
        if view.length_squared() == 0.0 || !view.is_finite() {
            return Err(RenderError::DegenerateCamera);
        }

        let forward = view.normalize();
        let right = WORLD_UP.cross(forward);
        if right.length_squared() < 1e-8 {
            return Err(RenderError::DegenerateCamera);
        }
        let right = right.normalize();
        let up = forward.cross(right);

        let half_height = (self.vfov.to_radians() / 2.0).tan();
        let aspect = self.image_width as f32 / self.image_height as f32;

        Ok(CameraBasis {
            eye: self.eye,
            forward,
            right,
            up,
            half_width: half_height * aspect,
            half_height,
            max_x: (self.image_width.saturating_sub(1)).max(1) as f32,
            max_y: (self.image_height.saturating_sub(1)).max(1) as f32,
        })
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Validated orthonormal viewing frame with cached viewport extents.
#[derive(Debug, Clone, Copy)]
pub struct CameraBasis {
    eye: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    half_width: f32,
    half_height: f32,
    max_x: f32,
    max_y: f32,
}

impl CameraBasis {
    /// Generate the ray for pixel (x, y) offset by `jitter` in [0, 1)².
    ///
    /// Pixel row 0 is the top of the image, which maps to +v in camera
    /// space, so y is inverted here.
    pub fn primary_ray(&self, x: u32, y: u32, jitter: Vec2) -> Ray {
        let u = ((x as f32 + jitter.x) / self.max_x) * 2.0 - 1.0;
        let v = ((self.max_y - (y as f32 + jitter.y)) / self.max_y) * 2.0 - 1.0;

        let direction =
            (self.forward + u * self.half_width * self.right + v * self.half_height * self.up)
                .normalize();
        Ray::new(self.eye, direction)
    }

    /// Generate the unjittered ray through the center of pixel (x, y).
    pub fn center_ray(&self, x: u32, y: u32) -> Ray {
        self.primary_ray(x, y, Vec2::splat(0.5))
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }
}
