use super::{Point3, Rotation3, Vector3};

/// Euler angles in radians, applied in intrinsic X, then Y, then Z order.
///
/// `y` is the yaw about the vertical axis, `x` the pitch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerRotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl EulerRotation {
    /// Creates a rotation from three angles.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The equivalent rotation matrix, `Rx * Ry * Rz`.
    #[must_use]
    pub fn to_rotation(&self) -> Rotation3 {
        Rotation3::from_axis_angle(&Vector3::x_axis(), self.x)
            * Rotation3::from_axis_angle(&Vector3::y_axis(), self.y)
            * Rotation3::from_axis_angle(&Vector3::z_axis(), self.z)
    }
}

/// Position and orientation of a drawable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Point3,
    pub rotation: EulerRotation,
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(Point3::origin())
    }
}

impl Transform {
    /// A transform translated to `position` with no rotation.
    #[must_use]
    pub fn at(position: Point3) -> Self {
        Self {
            position,
            rotation: EulerRotation::default(),
        }
    }

    /// Maps a point from local into world space.
    #[must_use]
    pub fn transform_point(&self, local: &Point3) -> Point3 {
        self.position + self.rotation.to_rotation() * local.coords
    }
}
