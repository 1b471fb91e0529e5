use crate::constants::SURFACE_OPACITY;
use crate::geometry::PolyhedronMesh;
use crate::math::{EulerRotation, Point3, Transform};

/// The closed film left on the polyhedron's faces after blowing.
#[derive(Debug, Clone)]
pub struct SurfaceFilm {
    pub transform: Transform,
    pub mesh: PolyhedronMesh,
    pub opacity: f64,
    pub double_sided: bool,
}

/// Builds a [`SurfaceFilm`] from a polyhedron mesh.
pub struct BuildSurfaceFilm {
    mesh: PolyhedronMesh,
    position: Point3,
    rotation: EulerRotation,
    opacity: f64,
}

impl BuildSurfaceFilm {
    /// Creates a new `BuildSurfaceFilm` operation.
    ///
    /// `rotation` seeds the film's orientation, normally the rotation of the
    /// internal film it replaces.
    #[must_use]
    pub fn new(mesh: PolyhedronMesh, position: Point3, rotation: EulerRotation) -> Self {
        Self {
            mesh,
            position,
            rotation,
            opacity: SURFACE_OPACITY,
        }
    }

    /// Overrides the film opacity.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Executes the operation.
    #[must_use]
    pub fn execute(self) -> SurfaceFilm {
        SurfaceFilm {
            transform: Transform {
                position: self.position,
                rotation: self.rotation,
            },
            mesh: self.mesh,
            opacity: self.opacity,
            double_sided: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ShapeKind;
    use crate::operations::creation::MakePolyhedron;

    #[test]
    fn uses_polyhedron_faces_unchanged() {
        let mesh = MakePolyhedron::new(ShapeKind::Cube).execute();
        let film = BuildSurfaceFilm::new(mesh.clone(), Point3::origin(), EulerRotation::default())
            .execute();
        assert_eq!(film.mesh.indices, mesh.indices);
        assert_eq!(film.mesh.positions, mesh.positions);
        assert!(film.double_sided);
    }

    #[test]
    fn rotation_is_seeded_from_caller() {
        let mesh = MakePolyhedron::new(ShapeKind::Tetrahedron).execute();
        let rotation = EulerRotation::new(0.1, 2.5, 0.0);
        let film = BuildSurfaceFilm::new(mesh, Point3::new(0.0, 2.0, 0.0), rotation)
            .with_opacity(0.5)
            .execute();
        assert_eq!(film.transform.rotation, rotation);
        assert!((film.transform.position.y - 2.0).abs() < f64::EPSILON);
        assert!((film.opacity - 0.5).abs() < f64::EPSILON);
    }
}
