use crate::{material::Material, Hit, Intersect, Ray};
use glam::Vec3;

#[derive(Clone, Debug)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        assert!(radius > 0.0, "non-positive sphere radius {}", radius);

        Self {
            center,
            radius,
            material,
        }
    }
}

impl Intersect for Sphere {
    fn intersection(&self, ray: Ray) -> Option<f32> {
        // Project the center onto the ray and compare the perpendicular distance to the radius
        let l = self.center - ray.origin;
        let tca = l.dot(ray.direction);
        let d2 = l.dot(l) - tca * tca;
        let r2 = self.radius * self.radius;

        if d2 > r2 {
            return None;
        }

        let thc = f32::sqrt(r2 - d2);
        let t_0 = tca - thc;
        let t_1 = tca + thc;

        // Origin inside the sphere
        let t = if t_0 < 0.0 { t_1 } else { t_0 };

        if t < 0.0 {
            None
        } else {
            Some(t)
        }
    }

    fn hit(&self, ray: Ray, t: f32) -> Hit {
        let point = ray.point_at_parameter(t);

        Hit {
            t,
            point,
            normal: crate::vector::normalize(point - self.center),
            material: self.material,
        }
    }
}
