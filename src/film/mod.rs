//! Drawable soap films.
//!
//! Two topologies exist. The internal film is a fan of triangles from the
//! centroid to every polyhedron edge, plus a centroid marker and reference
//! lines to each vertex. The surface film is a closed shell made of the
//! polyhedron's own faces.

mod internal_film;
mod surface_film;

pub use internal_film::{BuildInternalFilm, InternalFilm};
pub use surface_film::{BuildSurfaceFilm, SurfaceFilm};

use crate::config::ExperimentConfig;
use crate::constants::{
    DEDUP_PRECISION, EDGE_THRESHOLD_DEG, FAN_OPACITY, MARKER_OPACITY, RADIATING_LINE_OPACITY,
    SURFACE_OPACITY,
};
use crate::math::{easing::lerp, Point3};

/// Role of a piece inside the internal film, fixed at construction.
///
/// The blow fade dispatches on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilmRole {
    /// Triangle from the centroid to one polyhedron edge.
    FanTriangle,
    /// Sphere marking the centroid.
    Marker,
    /// Reference segment from the centroid to one vertex.
    RadiatingLine,
}

impl FilmRole {
    /// Opacity this role reaches at the end of the blow.
    #[must_use]
    pub fn fade_target(self, params: &FilmParams) -> f64 {
        match self {
            Self::FanTriangle => params.surface_opacity,
            Self::Marker | Self::RadiatingLine => 0.0,
        }
    }
}

/// Geometry of a single film piece, in the film's local space.
#[derive(Debug, Clone, PartialEq)]
pub enum PieceGeometry {
    Triangle([Point3; 3]),
    Sphere { center: Point3, radius: f64 },
    Segment(Point3, Point3),
}

/// One translucent element of the internal film.
#[derive(Debug, Clone, PartialEq)]
pub struct FilmPiece {
    pub role: FilmRole,
    pub geometry: PieceGeometry,
    /// Opacity at construction time.
    pub initial_opacity: f64,
    /// Current opacity.
    pub opacity: f64,
    /// Rendered from both sides.
    pub double_sided: bool,
}

impl FilmPiece {
    fn new(role: FilmRole, geometry: PieceGeometry, opacity: f64) -> Self {
        Self {
            role,
            geometry,
            initial_opacity: opacity,
            opacity,
            double_sided: role == FilmRole::FanTriangle,
        }
    }

    /// Sets the opacity for a blow `progress` in `[0, 1]`.
    pub fn fade(&mut self, progress: f64, params: &FilmParams) {
        let target = self.role.fade_target(params);
        self.opacity = lerp(self.initial_opacity, target, progress.clamp(0.0, 1.0));
    }
}

/// Parameters shared by the film builders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilmParams {
    pub fan_opacity: f64,
    pub radiating_line_opacity: f64,
    pub marker_opacity: f64,
    pub surface_opacity: f64,
    pub dedup_precision: u32,
    pub edge_threshold_deg: f64,
}

impl Default for FilmParams {
    fn default() -> Self {
        Self {
            fan_opacity: FAN_OPACITY,
            radiating_line_opacity: RADIATING_LINE_OPACITY,
            marker_opacity: MARKER_OPACITY,
            surface_opacity: SURFACE_OPACITY,
            dedup_precision: DEDUP_PRECISION,
            edge_threshold_deg: EDGE_THRESHOLD_DEG,
        }
    }
}

impl From<&ExperimentConfig> for FilmParams {
    fn from(config: &ExperimentConfig) -> Self {
        Self {
            fan_opacity: config.fan_opacity,
            radiating_line_opacity: config.radiating_line_opacity,
            marker_opacity: config.marker_opacity,
            surface_opacity: config.surface_opacity,
            dedup_precision: config.dedup_precision,
            edge_threshold_deg: config.edge_threshold_deg,
        }
    }
}
