use glam::{vec3, Vec3};

// Reflect vector v around normal n
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

// Refract vector v through a surface with normal n using Snell's law.
// Works from either side of the surface, returns zero on total internal reflection.
pub fn refract(v: Vec3, n: Vec3, refractive_index: f32) -> Vec3 {
    let mut cos_i = -f32::max(-1.0, f32::min(1.0, v.dot(n)));
    let mut eta_i = 1.0;
    let mut eta_t = refractive_index;
    let mut n = n;

    // Leaving the medium
    if cos_i < 0.0 {
        cos_i = -cos_i;
        std::mem::swap(&mut eta_i, &mut eta_t);
        n = -n;
    }

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);

    if k < 0.0 {
        Vec3::zero()
    } else {
        v * eta + n * (eta * cos_i - f32::sqrt(k))
    }
}

/// Surface description shared by every shading model in the tracer.
///
/// The albedo weighs the diffuse, specular, reflected and refracted terms, in that order.
/// The weights are artistic and are not required to conserve energy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Base color on the 0-255 scale
    pub diffuse_color: Vec3,
    pub specular_exponent: f32,
    pub refractive_index: f32,
    pub albedo: [f32; 4],
}

impl Material {
    pub fn new(
        diffuse_color: Vec3,
        specular_exponent: f32,
        refractive_index: f32,
        albedo: [f32; 4],
    ) -> Self {
        assert!(
            specular_exponent >= 0.0,
            "negative specular exponent {}",
            specular_exponent
        );
        assert!(
            refractive_index > 0.0,
            "non-positive refractive index {}",
            refractive_index
        );
        assert!(
            albedo.iter().all(|a| a.is_finite()),
            "non-finite albedo {:?}",
            albedo
        );

        Self {
            diffuse_color,
            specular_exponent,
            refractive_index,
            albedo,
        }
    }

    /// Creates a material from a color with channels in [0, 1]
    pub fn from_rgb(
        r: f32,
        g: f32,
        b: f32,
        specular_exponent: f32,
        refractive_index: f32,
        albedo: [f32; 4],
    ) -> Self {
        Self::new(
            255.0 * vec3(r, g, b),
            specular_exponent,
            refractive_index,
            albedo,
        )
    }

    pub fn diffuse(&self) -> f32 {
        self.albedo[0]
    }

    pub fn specular(&self) -> f32 {
        self.albedo[1]
    }

    pub fn reflective(&self) -> f32 {
        self.albedo[2]
    }

    pub fn refractive(&self) -> f32 {
        self.albedo[3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::normalize;
    use approx::assert_abs_diff_eq;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-5);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-5);
        assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-5);
    }

    #[test]
    fn reflect_mirrors_about_normal() {
        let n = vec3(0.0, 1.0, 0.0);
        let v = normalize(vec3(1.0, -1.0, 0.0));

        assert_vec_eq(reflect(v, n), normalize(vec3(1.0, 1.0, 0.0)));
    }

    #[test]
    fn reflect_twice_is_identity() {
        let normals = [
            vec3(0.0, 1.0, 0.0),
            normalize(vec3(1.0, 2.0, -3.0)),
            normalize(vec3(-0.3, 0.1, 0.9)),
        ];
        let vectors = [
            normalize(vec3(1.0, -1.0, 0.5)),
            normalize(vec3(-4.0, 0.2, 0.1)),
            vec3(0.0, 0.0, -1.0),
        ];

        for &n in &normals {
            for &v in &vectors {
                assert_vec_eq(reflect(reflect(v, n), n), v);
            }
        }
    }

    #[test]
    fn refract_index_one_passes_straight_through() {
        let n = vec3(0.0, 1.0, 0.0);
        let v = normalize(vec3(0.3, -1.0, 0.2));

        assert_vec_eq(refract(v, n, 1.0), v);
    }

    #[test]
    fn refract_bends_towards_normal_when_entering() {
        let n = vec3(0.0, 1.0, 0.0);
        let v = normalize(vec3(1.0, -1.0, 0.0));
        let t = normalize(refract(v, n, 1.5));

        // sin(t) = sin(45°) / 1.5
        let sin_t = f32::sqrt(0.5) / 1.5;
        assert_abs_diff_eq!(t.x, sin_t, epsilon = 1e-5);
        assert!(t.y < 0.0);
    }

    #[test]
    fn refract_exiting_swaps_indices() {
        // Ray inside the medium travelling along the outward normal
        let n = vec3(0.0, 1.0, 0.0);
        let v = normalize(vec3(0.2, 1.0, 0.0));
        let t = normalize(refract(v, n, 1.5));

        // Leaving a denser medium bends away from the normal
        assert!(t.x > v.x);
        assert!(t.y > 0.0);
    }

    #[test]
    fn total_internal_reflection_is_zero() {
        // Grazing ray leaving glass, past the critical angle
        let n = vec3(0.0, 1.0, 0.0);
        let v = normalize(vec3(1.0, 0.2, 0.0));

        assert_eq!(refract(v, n, 1.5), Vec3::zero());
    }

    #[test]
    #[should_panic]
    fn non_positive_refractive_index_fails() {
        Material::new(Vec3::one(), 10.0, 0.0, [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    #[should_panic]
    fn negative_specular_exponent_fails() {
        Material::new(Vec3::one(), -1.0, 1.0, [1.0, 0.0, 0.0, 0.0]);
    }
}
