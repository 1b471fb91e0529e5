use crate::constants::TETRAHEDRON_EDGE;
use crate::geometry::PolyhedronMesh;
use crate::math::Point3;

/// Creates a regular tetrahedron standing on the `y = 0` plane.
///
/// The apex sits at `h = a * sqrt(2/3)` above the centroid of the base
/// triangle, which is centred on the Y axis.
pub struct MakeTetrahedron {
    edge: f64,
}

impl MakeTetrahedron {
    /// Creates a new `MakeTetrahedron` operation with edge length `edge`.
    #[must_use]
    pub fn new(edge: f64) -> Self {
        Self { edge }
    }

    /// Executes the operation, returning the mesh.
    #[must_use]
    pub fn execute(&self) -> PolyhedronMesh {
        let a = self.edge;
        let h = a * (2.0_f64 / 3.0).sqrt();
        let sqrt3 = 3.0_f64.sqrt();

        let positions = vec![
            Point3::new(0.0, h, 0.0),
            Point3::new(-a / 2.0, 0.0, -a / (2.0 * sqrt3)),
            Point3::new(a / 2.0, 0.0, -a / (2.0 * sqrt3)),
            Point3::new(0.0, 0.0, a / sqrt3),
        ];
        // Three apex faces, one per base edge, then the base.
        let indices = vec![[0, 2, 1], [0, 3, 2], [0, 1, 3], [1, 2, 3]];

        PolyhedronMesh::new(positions, indices)
    }
}

impl Default for MakeTetrahedron {
    fn default() -> Self {
        Self::new(TETRAHEDRON_EDGE)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn all_edges_have_equal_length() {
        let mesh = MakeTetrahedron::default().execute();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 4);
        for i in 0..4 {
            for j in (i + 1)..4 {
                let len = (mesh.positions[i] - mesh.positions[j]).norm();
                assert_relative_eq!(len, 1.5, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn base_lies_on_ground_plane() {
        let mesh = MakeTetrahedron::default().execute();
        for p in &mesh.positions[1..] {
            assert_relative_eq!(p.y, 0.0);
        }
        let base_centroid_z: f64 = mesh.positions[1..].iter().map(|p| p.z).sum::<f64>() / 3.0;
        assert_relative_eq!(base_centroid_z, 0.0, epsilon = 1e-12);
    }
}
