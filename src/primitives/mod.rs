//! This module is full of primitives that all impl Intersect

mod checkerboard;
mod sphere;

pub use checkerboard::*;
pub use sphere::*;

use crate::ray::{Hit, Ray};

/// Computes whether a ray intersects a primitive
pub trait Intersect {
    /// Distance along the ray to the nearest intersection in front of its origin
    fn intersection(&self, ray: Ray) -> Option<f32>;

    /// Builds the surface data at distance `t` along the ray.
    /// Only called for the primitive that ended up closest, so it may be more expensive.
    fn hit(&self, ray: Ray, t: f32) -> Hit;
}
