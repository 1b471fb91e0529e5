use std::f64::consts::FRAC_PI_4;

use crate::constants::{STRAW_HOME, STRAW_LENGTH, STRAW_RADIUS, STRAW_TIP_RADIUS};
use crate::math::intersect_3d::{ray_hits_capsule, ray_sphere_intersect};
use crate::math::{Point3, Ray, Transform, Vector3};

/// The draggable straw used to blow on the film.
///
/// A thin capsule tilted 45° about Z, with a bulb at its upper-left end.
/// The straw itself never rotates; only its position moves.
#[derive(Debug, Clone)]
pub struct StrawTool {
    pub transform: Transform,
    pub visible: bool,
    pub body_radius: f64,
    pub body_length: f64,
    pub tip_radius: f64,
}

impl StrawTool {
    /// Unit direction of the body axis, from tail to tip.
    #[must_use]
    pub fn axis() -> Vector3 {
        Vector3::new(-FRAC_PI_4.sin(), FRAC_PI_4.cos(), 0.0)
    }

    /// World-space tail and tip of the body axis.
    #[must_use]
    pub fn body_segment(&self) -> (Point3, Point3) {
        let half = Self::axis() * (self.body_length / 2.0);
        let c = self.transform.position;
        (c - half, c + half)
    }

    /// World-space centre of the tip bulb.
    #[must_use]
    pub fn tip_center(&self) -> Point3 {
        self.body_segment().1
    }

    /// Whether `ray` touches the body or the tip.
    #[must_use]
    pub fn hit_test(&self, ray: &Ray) -> bool {
        let (tail, tip) = self.body_segment();
        ray_hits_capsule(ray, &tail, &tip, self.body_radius)
            || ray_sphere_intersect(ray, &tip, self.tip_radius).is_some()
    }

    /// Moves the straw within its current depth plane.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.transform.position.x = x;
        self.transform.position.y = y;
    }
}

impl Default for StrawTool {
    fn default() -> Self {
        let [x, y, z] = STRAW_HOME;
        Self {
            transform: Transform::at(Point3::new(x, y, z)),
            visible: false,
            body_radius: STRAW_RADIUS,
            body_length: STRAW_LENGTH,
            tip_radius: STRAW_TIP_RADIUS,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn tip_is_up_and_left_of_center() {
        let straw = StrawTool::default();
        let tip = straw.tip_center();
        assert_relative_eq!(tip.x, 3.0 - 0.883_883_476, epsilon = 1e-6);
        assert_relative_eq!(tip.y, 2.0 + 0.883_883_476, epsilon = 1e-6);
        assert_relative_eq!(tip.z, 2.0);
    }

    #[test]
    fn ray_through_center_hits() {
        let straw = StrawTool::default();
        let ray = Ray::new(Point3::new(3.0, 2.0, 10.0), Vector3::new(0.0, 0.0, -1.0)).unwrap();
        assert!(straw.hit_test(&ray));
    }

    #[test]
    fn ray_beside_body_misses() {
        let straw = StrawTool::default();
        // Perpendicular to the axis, 0.5 away from it.
        let offset = Vector3::new(0.5, 0.5, 0.0).normalize() * 0.5;
        let origin = Point3::new(3.0, 2.0, 10.0) + offset;
        let ray = Ray::new(origin, Vector3::new(0.0, 0.0, -1.0)).unwrap();
        assert!(!straw.hit_test(&ray));
    }

    #[test]
    fn move_keeps_depth() {
        let mut straw = StrawTool::default();
        straw.move_to(-1.0, 0.5);
        assert_relative_eq!(straw.transform.position, Point3::new(-1.0, 0.5, 2.0));
    }
}
