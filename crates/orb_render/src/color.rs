//! Linear-radiance to display-byte conversion.

use orb_math::Vec3;

/// Threshold below which the sRGB transfer function is linear.
const SRGB_LINEAR_CUTOFF: f32 = 0.003_130_8;

/// Encode one linear channel as an 8-bit sRGB value.
///
/// Input is clamped to [0, 1]; NaN maps to 0. Piecewise transfer per the
/// sRGB standard: linear below the cutoff, a 1/2.4 power curve above.
pub fn srgb_encode(linear: f32) -> u8 {
    if !(linear > 0.0) {
        return 0;
    }
    if linear >= 1.0 {
        return 255;
    }
    let srgb = if linear <= SRGB_LINEAR_CUTOFF {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    };
    (srgb * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Encode a linear RGB pixel as 4 display bytes in B,G,R,A order.
///
/// Alpha is always opaque.
pub fn bgra8(color: Vec3) -> [u8; 4] {
    [
        srgb_encode(color.z),
        srgb_encode(color.y),
        srgb_encode(color.x),
        255,
    ]
}
