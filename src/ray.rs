use crate::material::Material;
use glam::Vec3;

/// The ray data type
#[derive(Clone, Copy, Debug, Default)]
pub struct Ray {
    pub origin: Vec3,
    /// Expected to be normalized by whoever builds the ray
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    pub fn point_at_parameter(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}

/// The closest surface a ray ran into, with everything shading needs to know about it
#[derive(Clone, Copy, Debug)]
pub struct Hit {
    pub t: f32,
    pub point: Vec3,
    /// Unit length, pointing out of the surface
    pub normal: Vec3,
    pub material: Material,
}
