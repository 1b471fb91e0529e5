use crate::constants::OCTAHEDRON_RADIUS;
use crate::geometry::PolyhedronMesh;
use crate::math::Point3;

/// Creates a regular octahedron with a vertex at `±radius` on each axis.
pub struct MakeOctahedron {
    radius: f64,
}

impl MakeOctahedron {
    /// Creates a new `MakeOctahedron` operation.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Executes the operation, returning the mesh.
    #[must_use]
    pub fn execute(&self) -> PolyhedronMesh {
        let s = self.radius;
        let positions = vec![
            Point3::new(s, 0.0, 0.0),
            Point3::new(-s, 0.0, 0.0),
            Point3::new(0.0, s, 0.0),
            Point3::new(0.0, -s, 0.0),
            Point3::new(0.0, 0.0, s),
            Point3::new(0.0, 0.0, -s),
        ];
        // Four faces around +Y, then four around -Y; one vertex per axis pair.
        let indices = vec![
            [2, 4, 0],
            [2, 1, 4],
            [2, 5, 1],
            [2, 0, 5],
            [3, 0, 4],
            [3, 4, 1],
            [3, 1, 5],
            [3, 5, 0],
        ];

        PolyhedronMesh::new(positions, indices)
    }
}

impl Default for MakeOctahedron {
    fn default() -> Self {
        Self::new(OCTAHEDRON_RADIUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_face_spans_all_three_axes() {
        let mesh = MakeOctahedron::default().execute();
        assert_eq!(mesh.triangle_count(), 8);
        for face in &mesh.indices {
            let mut axes: Vec<u32> = face.iter().map(|i| i / 2).collect();
            axes.sort_unstable();
            assert_eq!(axes, vec![0, 1, 2]);
        }
    }
}
