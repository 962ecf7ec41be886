use crate::{vector::normalize, Ray};
use glam::{vec3, Vec3};
use std::f32::consts::PI;

/// A pinhole camera sitting at the origin and looking down -z
#[derive(Debug)]
pub struct Camera {
    origin: Vec3,
    width: u32,
    height: u32,
    half_width: f32,
    half_height: f32,
}

impl Camera {
    /// `fov` is the vertical field of view in degrees
    pub fn new(width: u32, height: u32, fov: f32) -> Self {
        assert!(width > 0 && height > 0, "empty image {}x{}", width, height);

        let theta = fov * PI / 180.0;
        let half_height = f32::tan(theta / 2.0);
        let aspect = width as f32 / height as f32;
        let half_width = aspect * half_height;

        Self {
            origin: Vec3::zero(),
            width,
            height,
            half_width,
            half_height,
        }
    }

    /// Primary ray through the center of pixel (`i`, `j`), rows counted from the top
    pub fn ray(&self, i: u32, j: u32) -> Ray {
        let s = 2.0 * (i as f32 + 0.5) / self.width as f32 - 1.0;
        let t = -(2.0 * (j as f32 + 0.5) / self.height as f32 - 1.0);

        Ray::new(
            self.origin,
            normalize(vec3(s * self.half_width, t * self.half_height, -1.0)),
        )
    }
}
