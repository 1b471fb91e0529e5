use crate::error::{GeometryError, Result};
use crate::math::Point3;

/// Computes the unweighted mean of a point set.
///
/// Used as the stand-in for the Fermat point where the internal film sheets
/// meet; it is not a true Steiner point solve.
pub struct Centroid<'a> {
    points: &'a [Point3],
}

impl<'a> Centroid<'a> {
    /// Creates a new `Centroid` query.
    #[must_use]
    pub fn new(points: &'a [Point3]) -> Self {
        Self { points }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the point set is empty.
    pub fn execute(&self) -> Result<Point3> {
        if self.points.is_empty() {
            return Err(GeometryError::Degenerate("centroid of an empty point set".into()).into());
        }
        let sum = self
            .points
            .iter()
            .fold(Point3::origin().coords, |acc, p| acc + p.coords);
        #[allow(clippy::cast_precision_loss)]
        let n = self.points.len() as f64;
        Ok(Point3::from(sum / n))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::ShapeKind;
    use crate::operations::creation::MakePolyhedron;
    use crate::operations::query::UniqueVertices;

    fn shape_centroid(kind: ShapeKind) -> Point3 {
        let mesh = MakePolyhedron::new(kind).execute();
        let unique = UniqueVertices::new(&mesh).execute();
        Centroid::new(&unique).execute().unwrap()
    }

    #[test]
    fn cube_centroid_is_origin() {
        assert_relative_eq!(shape_centroid(ShapeKind::Cube), Point3::origin(), epsilon = 1e-12);
    }

    #[test]
    fn octahedron_centroid_is_origin() {
        assert_relative_eq!(
            shape_centroid(ShapeKind::Octahedron),
            Point3::origin(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn tetrahedron_centroid_is_quarter_height() {
        let h = 1.5 * (2.0_f64 / 3.0).sqrt();
        assert_relative_eq!(
            shape_centroid(ShapeKind::Tetrahedron),
            Point3::new(0.0, h / 4.0, 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn mean_of_two_points_is_midpoint() {
        let points = [Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0)];
        assert_relative_eq!(
            Centroid::new(&points).execute().unwrap(),
            Point3::new(1.0, 0.0, 0.0)
        );
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(Centroid::new(&[]).execute().is_err());
    }
}
