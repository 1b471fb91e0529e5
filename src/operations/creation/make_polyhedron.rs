use crate::geometry::{PolyhedronMesh, ShapeKind};

use super::{MakeCube, MakeOctahedron, MakeTetrahedron};

/// Creates the mesh for a [`ShapeKind`] at its standard size.
///
/// Every call generates a fresh mesh; nothing is cached.
pub struct MakePolyhedron {
    kind: ShapeKind,
}

impl MakePolyhedron {
    /// Creates a new `MakePolyhedron` operation.
    #[must_use]
    pub fn new(kind: ShapeKind) -> Self {
        Self { kind }
    }

    /// Executes the operation, returning the mesh.
    #[must_use]
    pub fn execute(&self) -> PolyhedronMesh {
        match self.kind {
            ShapeKind::Tetrahedron => MakeTetrahedron::default().execute(),
            ShapeKind::Cube => MakeCube::default().execute(),
            ShapeKind::Octahedron => MakeOctahedron::default().execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::polyhedron::triangle_normal;
    use crate::math::Point3;

    fn mean(points: &[Point3]) -> Point3 {
        let sum = points.iter().fold(Point3::origin().coords, |acc, p| acc + p.coords);
        Point3::from(sum / points.len() as f64)
    }

    #[test]
    fn every_face_points_outward() {
        for kind in ShapeKind::ALL {
            let mesh = MakePolyhedron::new(kind).execute();
            let center = mean(&mesh.positions);
            for [a, b, c] in mesh.triangles() {
                let n = triangle_normal(&a, &b, &c);
                let face_center = Point3::from((a.coords + b.coords + c.coords) / 3.0);
                assert!(
                    n.dot(&(face_center - center)) > 0.0,
                    "{kind} has an inward face"
                );
            }
        }
    }

    #[test]
    fn meshes_are_regenerated_identically() {
        let a = MakePolyhedron::new(ShapeKind::Cube).execute();
        let b = MakePolyhedron::new(ShapeKind::Cube).execute();
        assert_eq!(a.positions, b.positions);
        assert_eq!(a.indices, b.indices);
    }

    #[test]
    fn indices_are_in_bounds() {
        for kind in ShapeKind::ALL {
            let mesh = MakePolyhedron::new(kind).execute();
            for face in &mesh.indices {
                assert!(face.iter().all(|&i| (i as usize) < mesh.vertex_count()));
            }
        }
    }
}
