use crate::{material::Material, Hit, Intersect, Ray};
use glam::{vec3, Vec3};

/// Height of the board plane
pub const BOARD_HEIGHT: f32 = -4.0;
/// The board covers |x| < BOARD_HALF_WIDTH
pub const BOARD_HALF_WIDTH: f32 = 10.0;
/// The board covers BOARD_FAR < z < BOARD_NEAR
pub const BOARD_NEAR: f32 = -10.0;
pub const BOARD_FAR: f32 = -30.0;
/// Rays flatter than this never hit the board
pub const PARALLEL_EPSILON: f32 = 1e-3;

/// A finite two tone checkerboard lying flat at `BOARD_HEIGHT`.
///
/// The board does not own a material, one is made up for every hit based on which tile was hit.
#[derive(Clone, Copy, Debug, Default)]
pub struct Checkerboard;

impl Checkerboard {
    pub fn new() -> Self {
        Self
    }

    /// Material of the tile under `point`
    pub fn material_at(point: Vec3) -> Material {
        let tile = (0.5 * point.x + 1000.0).floor() as i64 + (0.5 * point.z).floor() as i64;

        let color = if tile & 1 == 1 {
            vec3(0.3, 0.3, 0.3)
        } else {
            vec3(0.3, 0.2, 0.1)
        };

        Material::new(255.0 * color, 50.0, 1.0, [0.6, 0.3, 0.1, 0.0])
    }

    fn on_board(point: Vec3) -> bool {
        point.x.abs() < BOARD_HALF_WIDTH && point.z < BOARD_NEAR && point.z > BOARD_FAR
    }
}

impl Intersect for Checkerboard {
    fn intersection(&self, ray: Ray) -> Option<f32> {
        if ray.direction.y.abs() <= PARALLEL_EPSILON {
            return None;
        }

        let d = -(ray.origin.y - BOARD_HEIGHT) / ray.direction.y;

        if d > 0.0 && Self::on_board(ray.point_at_parameter(d)) {
            Some(d)
        } else {
            None
        }
    }

    fn hit(&self, ray: Ray, t: f32) -> Hit {
        let point = ray.point_at_parameter(t);

        Hit {
            t,
            point,
            normal: vec3(0.0, 1.0, 0.0),
            material: Self::material_at(point),
        }
    }
}
