use crate::{
    light::Light,
    primitives::{Checkerboard, Intersect, Sphere},
    Hit, Ray,
};
use glam::{vec3, Vec3};

/// Anything farther away than this counts as escaping to the background
pub const MAX_DISTANCE: f32 = 1000.0;

/// Everything a render needs to know about the world. Read only while rendering.
pub struct Scene {
    spheres: Vec<Sphere>,
    checkerboard: Checkerboard,
    lights: Vec<Light>,
    /// Color of rays that escape, on the 0-255 scale
    pub background: Vec3,
}

impl Scene {
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>) -> Self {
        Self {
            spheres,
            checkerboard: Checkerboard::new(),
            lights,
            background: 255.0 * vec3(0.2, 0.7, 0.8),
        }
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Finds the closest surface along `ray` within `MAX_DISTANCE`
    pub fn intersection(&self, ray: Ray) -> Option<Hit> {
        // Linear scan, a strictly smaller distance is needed to replace the current best
        let mut closest: Option<(&Sphere, f32)> = None;
        for sphere in &self.spheres {
            if let Some(t) = sphere.intersection(ray) {
                if closest.map_or(true, |(_, best)| t < best) {
                    closest = Some((sphere, t));
                }
            }
        }

        let sphere_distance = closest.map_or(f32::INFINITY, |(_, t)| t);

        // The board only wins when it is strictly in front of every sphere
        match self.checkerboard.intersection(ray) {
            Some(t) if t < sphere_distance && t < MAX_DISTANCE => {
                Some(self.checkerboard.hit(ray, t))
            }
            _ => closest
                .filter(|&(_, t)| t < MAX_DISTANCE)
                .map(|(sphere, t)| sphere.hit(ray, t)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{material::Material, vector::normalize};
    use approx::assert_abs_diff_eq;

    fn matte(r: f32) -> Material {
        Material::from_rgb(r, 0.0, 0.0, 10.0, 1.0, [1.0, 0.0, 0.0, 0.0])
    }

    #[test]
    fn empty_scene_misses() {
        let scene = Scene::new(Vec::new(), Vec::new());
        let ray = Ray::new(Vec3::zero(), vec3(0.0, 0.0, -1.0));

        assert!(scene.intersection(ray).is_none());
    }

    #[test]
    fn closest_sphere_wins_regardless_of_order() {
        let near = Sphere::new(vec3(0.0, 0.0, -5.0), 1.0, matte(0.5));
        let far = Sphere::new(vec3(0.0, 0.0, -10.0), 1.0, matte(1.0));
        let ray = Ray::new(Vec3::zero(), vec3(0.0, 0.0, -1.0));

        for spheres in vec![vec![near.clone(), far.clone()], vec![far, near]] {
            let hit = Scene::new(spheres, Vec::new()).intersection(ray).unwrap();
            assert_abs_diff_eq!(hit.t, 4.0, epsilon = 1e-5);
            assert_eq!(hit.material, matte(0.5));
        }
    }

    #[test]
    fn sphere_in_front_of_board_wins() {
        let ray = Ray::new(Vec3::zero(), normalize(vec3(0.0, -1.0, -4.0)));
        let board = Scene::new(Vec::new(), Vec::new()).intersection(ray).unwrap();

        // Sits on the path to the board
        let blocker = Sphere::new(ray.point_at_parameter(5.0), 0.5, matte(1.0));
        let scene = Scene::new(vec![blocker], Vec::new());
        let hit = scene.intersection(ray).unwrap();

        assert!(hit.t < board.t);
        assert_eq!(hit.material, matte(1.0));
    }

    #[test]
    fn board_in_front_of_sphere_wins() {
        let ray = Ray::new(Vec3::zero(), normalize(vec3(0.0, -1.0, -4.0)));
        // Below the board
        let hidden = Sphere::new(ray.point_at_parameter(30.0), 1.0, matte(1.0));
        let hit = Scene::new(vec![hidden], Vec::new())
            .intersection(ray)
            .unwrap();

        assert_eq!(hit.normal, vec3(0.0, 1.0, 0.0));
        assert_eq!(hit.material, Checkerboard::material_at(hit.point));
    }

    #[test]
    fn hits_past_max_distance_escape() {
        let far = Sphere::new(vec3(0.0, 0.0, -2000.0), 10.0, matte(1.0));
        let scene = Scene::new(vec![far], Vec::new());
        let ray = Ray::new(Vec3::zero(), vec3(0.0, 0.0, -1.0));

        assert!(scene.intersection(ray).is_none());
    }
}
