use std::collections::HashSet;

use crate::constants::DEDUP_PRECISION;
use crate::geometry::{PolyhedronMesh, VertexKey};
use crate::math::Point3;

/// Collects the distinct vertex positions of a mesh.
///
/// Positions are keyed by rounding to `precision` decimal places; the first
/// position seen for a key is kept and storage order is preserved.
pub struct UniqueVertices<'a> {
    mesh: &'a PolyhedronMesh,
    precision: u32,
}

impl<'a> UniqueVertices<'a> {
    /// Creates a new `UniqueVertices` query at the default precision.
    #[must_use]
    pub fn new(mesh: &'a PolyhedronMesh) -> Self {
        Self {
            mesh,
            precision: DEDUP_PRECISION,
        }
    }

    /// Overrides the number of decimal places used as identity key.
    #[must_use]
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> Vec<Point3> {
        let mut seen = HashSet::with_capacity(self.mesh.vertex_count());
        self.mesh
            .positions
            .iter()
            .filter(|p| seen.insert(VertexKey::new(p, self.precision)))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ShapeKind;
    use crate::operations::creation::MakePolyhedron;

    fn count(kind: ShapeKind) -> usize {
        UniqueVertices::new(&MakePolyhedron::new(kind).execute())
            .execute()
            .len()
    }

    #[test]
    fn counts_per_shape() {
        assert_eq!(count(ShapeKind::Tetrahedron), 4);
        assert_eq!(count(ShapeKind::Cube), 8);
        assert_eq!(count(ShapeKind::Octahedron), 6);
    }

    #[test]
    fn first_occurrence_order_is_kept() {
        let mesh = PolyhedronMesh::new(
            vec![
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(1.000_1, 0.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![],
        );
        let unique = UniqueVertices::new(&mesh).execute();
        assert_eq!(
            unique,
            vec![
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
            ]
        );
    }

    #[test]
    fn finer_precision_separates_near_duplicates() {
        let mesh = PolyhedronMesh::new(
            vec![Point3::new(1.0, 0.0, 0.0), Point3::new(1.000_1, 0.0, 0.0)],
            vec![],
        );
        assert_eq!(UniqueVertices::new(&mesh).execute().len(), 1);
        assert_eq!(
            UniqueVertices::new(&mesh).with_precision(6).execute().len(),
            2
        );
    }

    #[test]
    fn cube_order_starts_on_positive_x_face() {
        let mesh = MakePolyhedron::new(ShapeKind::Cube).execute();
        let unique = UniqueVertices::new(&mesh).execute();
        assert!(unique[..4].iter().all(|p| (p.x - 1.0).abs() < 1e-12));
        assert!(unique[4..].iter().all(|p| (p.x + 1.0).abs() < 1e-12));
    }
}
