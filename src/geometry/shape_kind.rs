use std::fmt;
use std::str::FromStr;

/// The polyhedra the experiment can dip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShapeKind {
    #[default]
    Tetrahedron,
    Cube,
    Octahedron,
}

impl ShapeKind {
    /// All selectable kinds, in menu order.
    pub const ALL: [Self; 3] = [Self::Tetrahedron, Self::Cube, Self::Octahedron];

    /// Resolves a shape name, falling back to [`ShapeKind::Tetrahedron`] for
    /// anything unrecognized.
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        name.parse().unwrap_or_else(|()| {
            tracing::debug!(name, "unknown shape name, using tetrahedron");
            Self::Tetrahedron
        })
    }

    /// Lowercase name of the kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Tetrahedron => "tetrahedron",
            Self::Cube => "cube",
            Self::Octahedron => "octahedron",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tetrahedron" => Ok(Self::Tetrahedron),
            "cube" => Ok(Self::Cube),
            "octahedron" => Ok(Self::Octahedron),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_names() {
        assert_eq!(ShapeKind::resolve("cube"), ShapeKind::Cube);
        assert_eq!(ShapeKind::resolve(" Octahedron "), ShapeKind::Octahedron);
        assert_eq!(ShapeKind::resolve("TETRAHEDRON"), ShapeKind::Tetrahedron);
    }

    #[test]
    fn unknown_falls_back_to_tetrahedron() {
        assert_eq!(ShapeKind::resolve("dodecahedron"), ShapeKind::Tetrahedron);
        assert_eq!(ShapeKind::resolve(""), ShapeKind::Tetrahedron);
    }

    #[test]
    fn display_round_trips_through_resolve() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::resolve(&kind.to_string()), kind);
        }
    }
}
