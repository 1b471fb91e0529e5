use crate::constants::{BASIN_CENTER_Y, BASIN_HEIGHT, BASIN_RADIUS};
use crate::math::{Point3, Transform};

/// Open cylinder of soap solution below the shape.
#[derive(Debug, Clone)]
pub struct Basin {
    pub transform: Transform,
    pub radius: f64,
    pub height: f64,
    /// Depth of liquid measured from the basin floor.
    pub liquid_depth: f64,
}

impl Basin {
    /// Height of the liquid surface in world space.
    #[must_use]
    pub fn liquid_surface(&self) -> f64 {
        self.transform.position.y - self.height / 2.0 + self.liquid_depth
    }
}

impl Default for Basin {
    fn default() -> Self {
        Self {
            transform: Transform::at(Point3::new(0.0, BASIN_CENTER_Y, 0.0)),
            radius: BASIN_RADIUS,
            height: BASIN_HEIGHT,
            liquid_depth: BASIN_HEIGHT - 0.2,
        }
    }
}
