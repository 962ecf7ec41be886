//! The recursive Whitted style shader

use crate::{
    material::{reflect, refract},
    scene::Scene,
    vector::{max_component, normalize},
    Ray,
};
use glam::{vec3, Vec3};

/// Rays at deeper recursion levels than this return the background
pub const MAX_DEPTH: u32 = 4;
/// Offset applied to the origin of rays leaving a surface
pub const BIAS: f32 = 1e-3;
/// Largest channel value that can be displayed
pub const DISPLAY_MAX: f32 = 255.0;

/// An 8 bit per channel color, implicitly fully opaque
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Tone maps a color on the 0-255 scale
    pub fn from_radiance(radiance: Vec3) -> Self {
        let c = fit_to_display(radiance);

        // `as` truncates and saturates, NaN ends up as 0
        Self::new(c.x as u8, c.y as u8, c.z as u8)
    }

    pub fn to_vec3(self) -> Vec3 {
        vec3(self.r as f32, self.g as f32, self.b as f32)
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

/// Scales all channels down by the same factor if any of them is too bright, keeping the hue
pub fn fit_to_display(c: Vec3) -> Vec3 {
    let max = max_component(c);

    if max > DISPLAY_MAX {
        c * (DISPLAY_MAX / max)
    } else {
        c
    }
}

// Start secondary rays just off the surface, on the side they travel towards
fn offset_origin(point: Vec3, normal: Vec3, direction: Vec3) -> Vec3 {
    if direction.dot(normal) < 0.0 {
        point - normal * BIAS
    } else {
        point + normal * BIAS
    }
}

/// Computes the color seen along `ray`.
///
/// Every hit spawns a reflected and a refracted ray one level deeper, so the work is a binary tree
/// bounded by `MAX_DEPTH`. Children whose albedo weight is zero are not traced since their
/// contribution would be dropped anyway.
pub fn shade(ray: Ray, scene: &Scene, depth: u32) -> Color {
    if depth > MAX_DEPTH {
        return Color::from_radiance(scene.background);
    }

    let hit = match scene.intersection(ray) {
        Some(hit) => hit,
        None => return Color::from_radiance(scene.background),
    };

    let material = hit.material;
    let (point, normal) = (hit.point, hit.normal);

    let reflect_color = if material.reflective() != 0.0 {
        let direction = normalize(reflect(ray.direction, normal));
        let origin = offset_origin(point, normal, direction);
        shade(Ray::new(origin, direction), scene, depth + 1).to_vec3()
    } else {
        Vec3::zero()
    };

    let refract_color = if material.refractive() != 0.0 {
        // Zero on total internal reflection, the resulting ray simply finds nothing
        let direction = normalize(refract(ray.direction, normal, material.refractive_index));
        let origin = offset_origin(point, normal, direction);
        shade(Ray::new(origin, direction), scene, depth + 1).to_vec3()
    } else {
        Vec3::zero()
    };

    let mut diffuse_intensity = 0.0;
    let mut specular_intensity = 0.0;

    for light in scene.lights() {
        let to_light = light.position - point;
        let light_distance = to_light.length();
        let light_dir = normalize(to_light);

        // Hard shadows, anything between the surface and the light blocks it completely
        let shadow_origin = offset_origin(point, normal, light_dir);
        if let Some(blocker) = scene.intersection(Ray::new(shadow_origin, light_dir)) {
            if blocker.t < light_distance {
                continue;
            }
        }

        diffuse_intensity += light.intensity * f32::max(0.0, light_dir.dot(normal));
        specular_intensity += f32::max(0.0, -reflect(-light_dir, normal).dot(ray.direction))
            .powf(material.specular_exponent)
            * light.intensity;
    }

    let radiance = material.diffuse_color * diffuse_intensity * material.diffuse()
        + Vec3::splat(DISPLAY_MAX) * specular_intensity * material.specular()
        + reflect_color * material.reflective()
        + refract_color * material.refractive();

    Color::from_radiance(radiance)
}
