//! Error type for scene and render configuration.

use thiserror::Error;

/// Configuration errors reported before or instead of rendering.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RenderError {
    #[error("sphere radius must be positive and finite, got {radius}")]
    InvalidRadius { radius: f32 },

    #[error("samples_per_pixel must be at least 1")]
    NoSamples,

    #[error("image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("camera eye, look-at target and world up do not form a valid viewing frame")]
    DegenerateCamera,

    #[error("ray direction must be non-zero and finite")]
    DegenerateRay,

    #[error("output buffer too small: need {needed} bytes, got {available}")]
    BufferTooSmall { needed: usize, available: usize },

    #[error("row stride of {stride} bytes is below the row size of {row_bytes} bytes")]
    StrideTooSmall { stride: usize, row_bytes: usize },
}
