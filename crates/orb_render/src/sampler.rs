//! Per-worker random sampling.
//!
//! One `Sampler` per concurrently executing row. Sharing a single
//! generator across rayon workers would race-corrupt its state and skew
//! the sample distribution, so the frame driver derives an independent
//! stream per row from the render seed.

use orb_math::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random-number state for one execution context.
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    /// Create a sampler for stream `stream` derived from a base seed.
    ///
    /// Distinct `(seed, stream)` pairs yield uncorrelated sequences;
    /// identical pairs reproduce the same sequence exactly.
    pub fn seeded(seed: u64, stream: u64) -> Self {
        let state = seed ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        Self {
            rng: StdRng::seed_from_u64(state),
        }
    }

    /// Uniform scalar in [0, 1).
    #[inline]
    pub fn uniform_f32(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Per-sample jitter offset in [0, 1)².
    #[inline]
    pub fn jitter(&mut self) -> Vec2 {
        Vec2::new(self.rng.gen(), self.rng.gen())
    }

    /// Uniform direction on the hemisphere around `normal`.
    ///
    /// Rejection-samples a point in the unit ball, normalizes it, and
    /// flips it onto the side of `normal`. Deliberately uniform rather
    /// than cosine-weighted; the integrator's weighting matches this.
    pub fn uniform_hemisphere(&mut self, normal: Vec3) -> Vec3 {
        loop {
            let p = Vec3::new(
                self.uniform_f32() * 2.0 - 1.0,
                self.uniform_f32() * 2.0 - 1.0,
                self.uniform_f32() * 2.0 - 1.0,
            );
            let len_sq = p.length_squared();
            if len_sq > 1e-6 && len_sq < 1.0 {
                let dir = p / len_sq.sqrt();
                return if dir.dot(normal) < 0.0 { -dir } else { dir };
            }
        }
    }
}
