//! Compile-time defaults for every tunable of the experiment.
//!
//! [`crate::config::ExperimentConfig::default`] mirrors these values; a TOML
//! file only needs to name the ones it overrides.

// ── Animation ─────────────────────────────────────────────────────────────────

/// Length of the dip animation in milliseconds.
pub const DIP_DURATION_MS: u64 = 2000;

/// Length of the blow fade in milliseconds.
pub const BLOW_DURATION_MS: u64 = 1500;

/// Height at which the shape hangs above the basin.
pub const REST_HEIGHT: f64 = 2.0;

/// Lowest point of the dip, inside the liquid.
pub const SUBMERGED_HEIGHT: f64 = -2.5;

/// Yaw added to the shape every frame while nothing is being dragged.
pub const AUTO_ROTATION_PER_FRAME: f64 = 0.005;

// ── Interaction ───────────────────────────────────────────────────────────────

/// A straw release closer than this (in pixels) to its press is a click.
pub const CLICK_THRESHOLD_PX: f64 = 10.0;

/// Radians of rotation per pixel of shape drag.
pub const DRAG_ROTATION_SCALE: f64 = 0.01;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Decimal places used to key vertices during deduplication.
pub const DEDUP_PRECISION: u32 = 3;

/// Dihedral angle (degrees) above which a shared triangle edge is a feature edge.
pub const EDGE_THRESHOLD_DEG: f64 = 1.0;

/// Edge length of the regular tetrahedron.
pub const TETRAHEDRON_EDGE: f64 = 1.5;

/// Side length of the cube.
pub const CUBE_SIDE: f64 = 2.0;

/// Distance of each octahedron vertex from the origin.
pub const OCTAHEDRON_RADIUS: f64 = 1.5;

// ── Film appearance ───────────────────────────────────────────────────────────

/// Starting opacity of each fan triangle in the internal film.
pub const FAN_OPACITY: f64 = 0.3;

/// Starting opacity of the centroid-to-vertex reference lines.
pub const RADIATING_LINE_OPACITY: f64 = 0.4;

/// Starting opacity of the centroid marker.
pub const MARKER_OPACITY: f64 = 1.0;

/// Opacity of the surface film, and the target the fan thickens toward.
pub const SURFACE_OPACITY: f64 = 0.4;

/// Radius of the centroid marker sphere.
pub const MARKER_RADIUS: f64 = 0.1;

/// Radius of the spheres marking each polyhedron vertex.
pub const VERTEX_MARKER_RADIUS: f64 = 0.08;

// ── Straw ─────────────────────────────────────────────────────────────────────

/// Radius of the straw body.
pub const STRAW_RADIUS: f64 = 0.08;

/// Length of the straw body.
pub const STRAW_LENGTH: f64 = 2.5;

/// Radius of the bulb at the straw tip.
pub const STRAW_TIP_RADIUS: f64 = 0.15;

/// Where the straw appears when first shown.
pub const STRAW_HOME: [f64; 3] = [3.0, 2.0, 2.0];

// ── Basin ─────────────────────────────────────────────────────────────────────

/// Radius of the basin holding the solution.
pub const BASIN_RADIUS: f64 = 2.0;

/// Height of the basin.
pub const BASIN_HEIGHT: f64 = 3.0;

/// Vertical position of the basin centre.
pub const BASIN_CENTER_Y: f64 = -3.0;
