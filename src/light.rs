use glam::Vec3;

/// An isotropic point light
#[derive(Clone, Copy, Debug)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f32,
}

impl Light {
    pub fn new(position: Vec3, intensity: f32) -> Self {
        assert!(intensity >= 0.0, "negative light intensity {}", intensity);

        Self {
            position,
            intensity,
        }
    }
}
