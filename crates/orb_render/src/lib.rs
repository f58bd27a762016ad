//! orb_render - CPU path tracing for sphere scenes.
//!
//! A Monte Carlo path tracer with:
//! - Brute-force sphere intersection (no acceleration structure)
//! - Diffuse + mirror material model with emission
//! - Russian-roulette path termination
//! - Row-parallel rendering with per-row samplers
//! - sRGB tone encoding to BGRA byte buffers

mod camera;
mod color;
mod error;
mod frame;
mod integrator;
mod material;
mod ray;
mod sampler;
mod scene;
mod sphere;

pub use camera::{Camera, CameraBasis};
pub use color::{bgra8, srgb_encode};
pub use error::RenderError;
pub use frame::{render, Frame, RenderConfig};
pub use integrator::trace_radiance;
pub use material::{reflect, Color, Material};
pub use ray::Ray;
pub use sampler::Sampler;
pub use scene::Scene;
pub use sphere::{HitInfo, Sphere};

/// Re-export common math types from orb_math
pub use orb_math::{Interval, Vec2, Vec3};
