//! Monte Carlo path integrator with Russian-roulette termination.

use crate::material::{reflect, Material};
use crate::{Ray, Sampler, Scene, Vec3};

/// Offset applied along the normal when spawning a bounce ray, so the new
/// ray does not immediately re-intersect the surface it left.
const BOUNCE_EPS: f32 = 1e-4;

/// Continuation probability for Russian roulette.
///
/// Throughput-based: the brightest reflectance channel of either lobe.
/// Dark surfaces terminate paths more often; surviving paths are divided
/// by this probability so the estimator stays unbiased.
fn continuation_probability(material: &Material) -> f32 {
    let diffuse_max = material.diffuse.max_element();
    let specular_max = if material.specular_chance > 0.0 {
        material.specular.max_element()
    } else {
        0.0
    };
    diffuse_max.max(specular_max).min(1.0)
}

/// Estimate the radiance arriving along `ray`.
///
/// Single-sample estimator of the rendering equation, written as a
/// throughput loop rather than call-stack recursion. Each iteration adds
/// the emission at the current hit, decides survival by Russian roulette,
/// then picks either the mirror lobe (with probability `specular_chance`)
/// or a uniform-hemisphere diffuse bounce.
///
/// Termination relies on the roulette; `max_bounces` is only a safety cap
/// against pathological scenes such as a closed cavity of perfect mirrors.
pub fn trace_radiance(
    ray: &Ray,
    scene: &Scene,
    background: Vec3,
    sampler: &mut Sampler,
    max_bounces: u32,
) -> Vec3 {
    let mut radiance = Vec3::ZERO;
    let mut throughput = Vec3::ONE;
    let mut ray = *ray;

    for _ in 0..=max_bounces {
        let hit = match scene.closest_hit(&ray) {
            Some(hit) => hit,
            None => {
                radiance += throughput * background;
                break;
            }
        };

        let material = hit.material;
        radiance += throughput * material.emission;

        let q = continuation_probability(&material);
        if q <= 0.0 || sampler.uniform_f32() > q {
            break;
        }

        let (direction, weight) = if sampler.uniform_f32() < material.specular_chance {
            (reflect(ray.direction(), hit.normal), material.specular)
        } else {
            (sampler.uniform_hemisphere(hit.normal), material.diffuse)
        };

        throughput *= weight / q;
        ray = Ray::new(hit.point + hit.normal * BOUNCE_EPS, direction.normalize());
    }

    radiance
}
