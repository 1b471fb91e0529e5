use crate::constants::MARKER_RADIUS;
use crate::error::{GeometryError, Result};
use crate::geometry::PolyhedronMesh;
use crate::math::{Point3, Transform};
use crate::operations::query::{FeatureEdges, UniqueVertices};

use super::{FilmParams, FilmPiece, FilmRole, PieceGeometry};

/// The branching film that forms inside the frame after a dip.
///
/// Pieces are stored fan triangles first, then the marker, then the
/// radiating lines.
#[derive(Debug, Clone, PartialEq)]
pub struct InternalFilm {
    pub transform: Transform,
    pub centroid: Point3,
    pub pieces: Vec<FilmPiece>,
}

impl InternalFilm {
    /// Number of pieces with the given role.
    #[must_use]
    pub fn count(&self, role: FilmRole) -> usize {
        self.pieces_with(role).count()
    }

    /// Pieces with the given role.
    pub fn pieces_with(&self, role: FilmRole) -> impl Iterator<Item = &FilmPiece> {
        self.pieces.iter().filter(move |p| p.role == role)
    }

    /// Applies the blow fade at `progress` to every piece.
    pub fn apply_fade(&mut self, progress: f64, params: &FilmParams) {
        for piece in &mut self.pieces {
            piece.fade(progress, params);
        }
    }
}

/// Builds an [`InternalFilm`] for a mesh around a convergence point.
pub struct BuildInternalFilm<'a> {
    mesh: &'a PolyhedronMesh,
    centroid: Point3,
    transform: Transform,
    params: FilmParams,
}

impl<'a> BuildInternalFilm<'a> {
    /// Creates a new `BuildInternalFilm` operation.
    ///
    /// `transform` is the pose of the shape at the moment of dipping; the
    /// film takes it over unchanged.
    #[must_use]
    pub fn new(mesh: &'a PolyhedronMesh, centroid: Point3, transform: Transform) -> Self {
        Self {
            mesh,
            centroid,
            transform,
            params: FilmParams::default(),
        }
    }

    /// Overrides opacities and derivation precision.
    #[must_use]
    pub fn with_params(mut self, params: FilmParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh has no triangles.
    pub fn execute(&self) -> Result<InternalFilm> {
        if self.mesh.triangle_count() == 0 {
            return Err(GeometryError::Degenerate("internal film of an empty mesh".into()).into());
        }

        let edges = FeatureEdges::new(self.mesh)
            .with_threshold_angle(self.params.edge_threshold_deg)
            .with_precision(self.params.dedup_precision)
            .execute();
        let vertices = UniqueVertices::new(self.mesh)
            .with_precision(self.params.dedup_precision)
            .execute();

        let c = self.centroid;
        let mut pieces = Vec::with_capacity(edges.len() + vertices.len() + 1);
        pieces.extend(edges.into_iter().map(|(v1, v2)| {
            FilmPiece::new(
                FilmRole::FanTriangle,
                PieceGeometry::Triangle([c, v1, v2]),
                self.params.fan_opacity,
            )
        }));
        pieces.push(FilmPiece::new(
            FilmRole::Marker,
            PieceGeometry::Sphere {
                center: c,
                radius: MARKER_RADIUS,
            },
            self.params.marker_opacity,
        ));
        pieces.extend(vertices.into_iter().map(|v| {
            FilmPiece::new(
                FilmRole::RadiatingLine,
                PieceGeometry::Segment(c, v),
                self.params.radiating_line_opacity,
            )
        }));

        Ok(InternalFilm {
            transform: self.transform,
            centroid: c,
            pieces,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::ShapeKind;
    use crate::math::EulerRotation;
    use crate::operations::creation::MakePolyhedron;
    use crate::operations::query::Centroid;

    fn build(kind: ShapeKind) -> InternalFilm {
        let mesh = MakePolyhedron::new(kind).execute();
        let unique = UniqueVertices::new(&mesh).execute();
        let centroid = Centroid::new(&unique).execute().unwrap();
        BuildInternalFilm::new(&mesh, centroid, Transform::default())
            .execute()
            .unwrap()
    }

    #[test]
    fn piece_counts_per_shape() {
        for (kind, fans, lines) in [
            (ShapeKind::Tetrahedron, 6, 4),
            (ShapeKind::Cube, 12, 8),
            (ShapeKind::Octahedron, 12, 6),
        ] {
            let film = build(kind);
            assert_eq!(film.count(FilmRole::FanTriangle), fans, "{kind}");
            assert_eq!(film.count(FilmRole::RadiatingLine), lines, "{kind}");
            assert_eq!(film.count(FilmRole::Marker), 1, "{kind}");
            assert_eq!(film.pieces.len(), fans + lines + 1);
        }
    }

    #[test]
    fn every_fan_triangle_starts_at_centroid() {
        let film = build(ShapeKind::Cube);
        for piece in film.pieces_with(FilmRole::FanTriangle) {
            let PieceGeometry::Triangle([c, _, _]) = piece.geometry else {
                panic!("fan piece is not a triangle");
            };
            assert_relative_eq!(c, film.centroid);
            assert!(piece.double_sided);
        }
    }

    #[test]
    fn marker_sits_on_centroid() {
        let film = build(ShapeKind::Tetrahedron);
        let marker = film.pieces_with(FilmRole::Marker).next().unwrap();
        assert_eq!(
            marker.geometry,
            PieceGeometry::Sphere {
                center: film.centroid,
                radius: MARKER_RADIUS
            }
        );
    }

    #[test]
    fn transform_is_copied_from_caller() {
        let mesh = MakePolyhedron::new(ShapeKind::Octahedron).execute();
        let pose = Transform {
            position: Point3::new(0.0, 2.0, 0.0),
            rotation: EulerRotation::new(0.3, 1.2, 0.0),
        };
        let film = BuildInternalFilm::new(&mesh, Point3::origin(), pose)
            .execute()
            .unwrap();
        assert_eq!(film.transform, pose);
    }

    #[test]
    fn full_fade_reaches_role_targets() {
        let params = FilmParams::default();
        let mut film = build(ShapeKind::Cube);
        film.apply_fade(1.0, &params);
        for piece in &film.pieces {
            assert_relative_eq!(piece.opacity, piece.role.fade_target(&params));
        }
    }

    #[test]
    fn empty_mesh_is_rejected() {
        let mesh = PolyhedronMesh::default();
        assert!(BuildInternalFilm::new(&mesh, Point3::origin(), Transform::default())
            .execute()
            .is_err());
    }
}
