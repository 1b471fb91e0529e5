use crate::constants::CUBE_SIDE;
use crate::geometry::PolyhedronMesh;
use crate::math::Point3;

/// Creates an axis-aligned cube centred at the origin.
///
/// Each face owns its four corners, as a renderer's box primitive does, so
/// the mesh stores 24 vertices for 8 distinct positions. Faces are emitted in
/// +X, -X, +Y, -Y, +Z, -Z order, two triangles each.
pub struct MakeCube {
    side: f64,
}

impl MakeCube {
    /// Creates a new `MakeCube` operation.
    #[must_use]
    pub fn new(side: f64) -> Self {
        Self { side }
    }

    /// Executes the operation, returning the mesh.
    #[must_use]
    pub fn execute(&self) -> PolyhedronMesh {
        let h = self.side / 2.0;
        let p = |x: f64, y: f64, z: f64| Point3::new(x * h, y * h, z * h);

        // Corners are counter-clockwise seen from outside.
        let faces = [
            [p(1.0, -1.0, 1.0), p(1.0, -1.0, -1.0), p(1.0, 1.0, -1.0), p(1.0, 1.0, 1.0)],
            [p(-1.0, -1.0, -1.0), p(-1.0, -1.0, 1.0), p(-1.0, 1.0, 1.0), p(-1.0, 1.0, -1.0)],
            [p(-1.0, 1.0, 1.0), p(1.0, 1.0, 1.0), p(1.0, 1.0, -1.0), p(-1.0, 1.0, -1.0)],
            [p(-1.0, -1.0, -1.0), p(1.0, -1.0, -1.0), p(1.0, -1.0, 1.0), p(-1.0, -1.0, 1.0)],
            [p(-1.0, -1.0, 1.0), p(1.0, -1.0, 1.0), p(1.0, 1.0, 1.0), p(-1.0, 1.0, 1.0)],
            [p(1.0, -1.0, -1.0), p(-1.0, -1.0, -1.0), p(-1.0, 1.0, -1.0), p(1.0, 1.0, -1.0)],
        ];

        let mut mesh = PolyhedronMesh::default();
        for corners in faces {
            mesh.merge(&quad(corners));
        }
        mesh
    }
}

impl Default for MakeCube {
    fn default() -> Self {
        Self::new(CUBE_SIDE)
    }
}

fn quad(corners: [Point3; 4]) -> PolyhedronMesh {
    PolyhedronMesh::new(corners.to_vec(), vec![[0, 1, 2], [0, 2, 3]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_split_layout() {
        let mesh = MakeCube::default().execute();
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn corners_at_unit_distance_per_axis() {
        let mesh = MakeCube::new(2.0).execute();
        for p in &mesh.positions {
            assert!((p.x.abs() - 1.0).abs() < 1e-12);
            assert!((p.y.abs() - 1.0).abs() < 1e-12);
            assert!((p.z.abs() - 1.0).abs() < 1e-12);
        }
    }
}
