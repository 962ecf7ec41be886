mod camera;
mod config;
mod light;
mod material;
mod primitives;
mod ray;
mod scene;
mod tracer;
mod vector;

use crate::{
    camera::Camera,
    config::{buffer_len, Config, COLOR_CHANNELS},
    light::Light,
    material::Material,
    primitives::{Intersect, Sphere},
    ray::{Hit, Ray},
    scene::Scene,
    tracer::shade,
};
use anyhow::Context;
use glam::vec3;
use log::{debug, info};
use std::path::{Path, PathBuf};

// Four spheres over the checkerboard, lit by three lights
fn showcase() -> Scene {
    let ivory = Material::from_rgb(0.4, 0.4, 0.3, 50.0, 1.0, [0.6, 0.3, 0.1, 0.0]);
    let glass = Material::from_rgb(0.6, 0.7, 0.8, 125.0, 1.5, [0.0, 0.5, 0.1, 0.8]);
    let red_rubber = Material::from_rgb(0.3, 0.1, 0.1, 10.0, 1.0, [0.9, 0.1, 0.0, 0.0]);
    // The artistic 10 is the specular weight, reflection stays at 0.8
    let mirror = Material::from_rgb(1.0, 1.0, 1.0, 1425.0, 1.0, [0.0, 10.0, 0.8, 0.0]);

    let spheres = vec![
        Sphere::new(vec3(-3.0, 0.0, -16.0), 2.0, ivory),
        Sphere::new(vec3(-1.0, -1.5, -12.0), 2.0, glass),
        Sphere::new(vec3(1.5, -0.5, -18.0), 3.0, red_rubber),
        Sphere::new(vec3(7.0, 5.0, -18.0), 4.0, mirror),
    ];

    let lights = vec![
        Light::new(vec3(-20.0, 20.0, 20.0), 1.5),
        Light::new(vec3(30.0, 50.0, -25.0), 1.8),
        Light::new(vec3(30.0, 20.0, 30.0), 1.7),
    ];

    Scene::new(spheres, lights)
}

// Renders the scene into a row major RGBA8 buffer
fn render(scene: &Scene, camera: &Camera, width: u32, height: u32) -> anyhow::Result<Vec<u8>> {
    let len = buffer_len(width, height)
        .with_context(|| format!("Image too large: {}x{}", width, height))?;
    let mut buffer = vec![0u8; len];

    buffer
        .chunks_mut(width as usize * COLOR_CHANNELS)
        .enumerate()
        .for_each(|(j, row)| {
            row.chunks_mut(COLOR_CHANNELS)
                .enumerate()
                .for_each(|(i, pixel)| {
                    let color = shade(camera.ray(i as u32, j as u32), scene, 0);

                    // Write output color to buffer
                    pixel.copy_from_slice(&color.to_rgba());
                })
        });

    Ok(buffer)
}

fn save_image(path: &Path, image: &[u8], width: u32, height: u32) -> anyhow::Result<()> {
    image::save_buffer(path, image, width, height, image::ColorType::Rgba8)
        .with_context(|| format!("Failed to save image: {:?}", path))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => Config::load(&PathBuf::from(path))?,
        None => Config::default(),
    };
    info!("{:?}", config);

    let scene = showcase();
    debug!(
        "Scene: {} spheres, {} lights",
        scene.spheres().len(),
        scene.lights().len()
    );

    let camera = Camera::new(config.width, config.height, config.fov);

    let start = std::time::Instant::now();
    let buffer = render(&scene, &camera, config.width, config.height)?;
    let duration = start.elapsed();

    let pixels = f64::from(config.width) * f64::from(config.height) / 1_000_000.0;
    info!(
        "Time elapsed: {:.2?}, {:.2}M pixels per second",
        duration,
        pixels / duration.as_secs_f64()
    );

    save_image(&config.output, &buffer, config.width, config.height)?;
    info!("Saved {:?}", config.output);

    Ok(())
}
