//! Frame driver: row-parallel rendering into a linear image buffer.

use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::color::bgra8;
use crate::integrator::trace_radiance;
use crate::{Camera, RenderError, Sampler, Scene, Vec3};

/// Render settings independent of scene and camera.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Independent camera samples averaged per pixel
    pub samples_per_pixel: u32,
    /// Safety cap on path length; Russian roulette terminates paths long
    /// before this in ordinary scenes
    pub max_bounces: u32,
    /// Base seed; per-row sampler streams are derived from it
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 64,
            max_bounces: 64,
            seed: 0,
        }
    }
}

/// Image of linear radiance values, row-major from the top-left.
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<Vec3>,
}

impl Frame {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the linear radiance of pixel (x, y).
    pub fn get(&self, x: u32, y: u32) -> Vec3 {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn pixels(&self) -> &[Vec3] {
        &self.pixels
    }

    /// Encode to a tightly packed B,G,R,A byte buffer (stride = width * 4).
    pub fn to_bgra(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            bytes.extend_from_slice(&bgra8(*px));
        }
        bytes
    }

    /// Encode into a host-supplied B,G,R,A buffer with the given row
    /// stride in bytes. Only `width * 4` bytes are written per row; any
    /// padding the host keeps between rows is left untouched.
    pub fn write_bgra(&self, buf: &mut [u8], stride: usize) -> Result<(), RenderError> {
        let row_bytes = self.width as usize * 4;
        if stride < row_bytes {
            return Err(RenderError::StrideTooSmall { stride, row_bytes });
        }
        let needed = (self.height as usize - 1) * stride + row_bytes;
        if buf.len() < needed {
            return Err(RenderError::BufferTooSmall {
                needed,
                available: buf.len(),
            });
        }

        for y in 0..self.height as usize {
            let row_start = y * stride;
            for x in 0..self.width as usize {
                let px = self.pixels[y * self.width as usize + x];
                buf[row_start + x * 4..row_start + x * 4 + 4].copy_from_slice(&bgra8(px));
            }
        }
        Ok(())
    }
}

/// Render the scene to a frame of linear radiance.
///
/// Rows are independent and rendered in parallel; each row gets its own
/// sampler stream derived from `config.seed`, so the result is
/// reproducible for a fixed seed regardless of thread scheduling.
pub fn render(scene: &Scene, camera: &Camera, config: &RenderConfig) -> Result<Frame, RenderError> {
    if config.samples_per_pixel < 1 {
        return Err(RenderError::NoSamples);
    }
    let (width, height) = (camera.image_width, camera.image_height);
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyImage { width, height });
    }
    let basis = camera.basis()?;

    info!(
        "rendering {}x{} at {} spp, {} spheres",
        width,
        height,
        config.samples_per_pixel,
        scene.len()
    );
    let start = Instant::now();

    let w = width as usize;
    let inv_samples = 1.0 / config.samples_per_pixel as f32;
    let mut pixels = vec![Vec3::ZERO; w * height as usize];

    pixels
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, row)| {
            let mut sampler = Sampler::seeded(config.seed, y as u64);
            for (x, px) in row.iter_mut().enumerate() {
                let mut sum = Vec3::ZERO;
                for _ in 0..config.samples_per_pixel {
                    let ray = basis.primary_ray(x as u32, y as u32, sampler.jitter());
                    sum += trace_radiance(
                        &ray,
                        scene,
                        camera.background,
                        &mut sampler,
                        config.max_bounces,
                    );
                }
                *px = sum * inv_samples;
            }
        });

    debug!("frame finished in {:?}", start.elapsed());
    Ok(Frame {
        width,
        height,
        pixels,
    })
}
