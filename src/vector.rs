//! Vector helpers on top of glam that tolerate degenerate input

use glam::Vec3;

/// Normalizes `v`, mapping zero-length (and non-finite length) vectors to zero instead of NaN
pub fn normalize(v: Vec3) -> Vec3 {
    let length = v.length();

    if length > 0.0 && length.is_finite() {
        v / length
    } else {
        Vec3::zero()
    }
}

/// The largest of the three components
pub fn max_component(v: Vec3) -> f32 {
    f32::max(v.x, f32::max(v.y, v.z))
}
