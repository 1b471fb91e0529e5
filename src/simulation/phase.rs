use std::fmt;

/// Stage of the experiment. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExperimentPhase {
    /// Shape hangs above the basin, no film.
    #[default]
    Idle,
    /// Shape is travelling into the solution and back.
    Dipping,
    /// Branching film meets at the centroid; the straw is out.
    InternalFilm,
    /// Internal film is fading into a surface film.
    Blowing,
    /// Only the outer surface film remains.
    SurfaceFilm,
}

impl fmt::Display for ExperimentPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Dipping => "dipping",
            Self::InternalFilm => "internal film",
            Self::Blowing => "blowing",
            Self::SurfaceFilm => "surface film",
        };
        f.write_str(name)
    }
}

/// Which film topology currently exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilmKind {
    #[default]
    None,
    /// Fan of sheets meeting at the centroid.
    Internal,
    /// Closed shell on the polyhedron faces.
    Surface,
}
