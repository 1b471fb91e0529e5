use crate::constants::VERTEX_MARKER_RADIUS;
use crate::film::FilmParams;
use crate::geometry::ShapeKind;
use crate::math::{Point3, Transform};
use crate::operations::creation::MakePolyhedron;
use crate::operations::query::{FeatureEdges, UniqueVertices};

/// The polyhedral frame: feature-edge wireframe with a marker on each vertex.
#[derive(Debug, Clone)]
pub struct ShapeObject {
    pub kind: ShapeKind,
    pub transform: Transform,
    pub edges: Vec<(Point3, Point3)>,
    /// Vertex marker centres, in first-occurrence order.
    pub vertex_markers: Vec<Point3>,
    pub marker_radius: f64,
}

impl ShapeObject {
    /// Builds the frame for `kind`, hanging at `height`.
    #[must_use]
    pub fn build(kind: ShapeKind, height: f64, params: &FilmParams) -> Self {
        let mesh = MakePolyhedron::new(kind).execute();
        let edges = FeatureEdges::new(&mesh)
            .with_threshold_angle(params.edge_threshold_deg)
            .with_precision(params.dedup_precision)
            .execute();
        let vertex_markers = UniqueVertices::new(&mesh)
            .with_precision(params.dedup_precision)
            .execute();
        Self {
            kind,
            transform: Transform::at(Point3::new(0.0, height, 0.0)),
            edges,
            vertex_markers,
            marker_radius: VERTEX_MARKER_RADIUS,
        }
    }
}
