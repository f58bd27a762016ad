//! Sphere-enclosure demo scene.
//!
//! Five radius-1000 wall spheres form a Cornell-box-like room around two
//! small spheres and a ceiling light. Renders and saves a PNG.

use orb_render::{render, Camera, Color, Material, RenderConfig, Scene, Sphere, Vec3};

fn main() {
    env_logger::init();

    let scene = build_scene().expect("scene construction failed");

    let camera = Camera::new()
        .with_resolution(512, 512)
        .with_position(Vec3::new(0.0, 0.0, -4.0), Vec3::new(0.0, 0.0, 6.0))
        .with_vfov(36.0)
        .with_background(Color::ZERO);

    let config = RenderConfig {
        samples_per_pixel: 256,
        max_bounces: 64,
        seed: 0,
    };

    println!(
        "Rendering {}x{} @ {} spp...",
        camera.image_width, camera.image_height, config.samples_per_pixel
    );
    let start = std::time::Instant::now();
    let frame = render(&scene, &camera, &config).expect("render failed");
    println!("Rendered in {:?}", start.elapsed());

    // Reorder B,G,R,A to the R,G,B,A the PNG encoder expects
    let bgra = frame.to_bgra();
    let mut rgba = bgra.clone();
    for (dst, src) in rgba.chunks_exact_mut(4).zip(bgra.chunks_exact(4)) {
        dst[0] = src[2];
        dst[1] = src[1];
        dst[2] = src[0];
        dst[3] = src[3];
    }

    let filename = "cornell_spheres.png";
    image::save_buffer(
        filename,
        &rgba,
        frame.width(),
        frame.height(),
        image::ColorType::Rgba8,
    )
    .expect("failed to save image");
    println!("Saved to {filename}");
}

fn build_scene() -> Result<Scene, orb_render::RenderError> {
    let mut scene = Scene::new();

    // Room walls
    scene.add(Sphere::new(
        Vec3::new(-1001.0, 0.0, 0.0),
        1000.0,
        Material::lambert(Color::new(0.8, 0.1, 0.1)),
    )?);
    scene.add(Sphere::new(
        Vec3::new(1001.0, 0.0, 0.0),
        1000.0,
        Material::lambert(Color::new(0.1, 0.1, 0.8)),
    )?);
    scene.add(Sphere::new(
        Vec3::new(0.0, 1001.0, 0.0),
        1000.0,
        Material::lambert(Color::new(0.8, 0.8, 0.8)),
    )?);
    scene.add(Sphere::new(
        Vec3::new(0.0, -1001.0, 0.0),
        1000.0,
        Material::lambert(Color::new(0.6, 0.6, 0.6)),
    )?);
    scene.add(Sphere::new(
        Vec3::new(0.0, 0.0, 1001.0),
        1000.0,
        Material::lambert(Color::new(0.6, 0.6, 0.6)),
    )?);

    // Interior spheres: a yellow diffuse ball and a glossy cyan one
    scene.add(Sphere::new(
        Vec3::new(-0.6, -0.7, -0.6),
        0.3,
        Material::lambert(Color::new(0.9, 0.9, 0.1)),
    )?);
    scene.add(Sphere::new(
        Vec3::new(0.3, -0.4, 0.3),
        0.6,
        Material::mirror(
            Color::new(0.1, 0.9, 0.9),
            Color::new(0.9, 0.9, 0.9),
            0.3,
        ),
    )?);

    // Ceiling light
    scene.add(Sphere::new(
        Vec3::new(0.0, 0.9, 0.0),
        0.25,
        Material::emissive(Color::splat(25.0)),
    )?);

    Ok(scene)
}
