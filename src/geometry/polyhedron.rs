use crate::math::{Point3, Vector3};

/// An indexed triangle mesh describing a closed polyhedron.
///
/// Faces are wound counter-clockwise when seen from outside, so
/// `(b - a) x (c - a)` points outward. Positions may repeat: a face-split
/// mesh (like the cube) stores each corner once per face that uses it.
#[derive(Debug, Clone, Default)]
pub struct PolyhedronMesh {
    /// Vertex positions.
    pub positions: Vec<Point3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl PolyhedronMesh {
    /// Creates a mesh from positions and triangles.
    #[must_use]
    pub fn new(positions: Vec<Point3>, indices: Vec<[u32; 3]>) -> Self {
        Self { positions, indices }
    }

    /// Number of stored vertices (duplicates included).
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Iterates the corner positions of every triangle.
    pub fn triangles(&self) -> impl Iterator<Item = [Point3; 3]> + '_ {
        self.indices.iter().map(|&[a, b, c]| {
            [
                self.positions[a as usize],
                self.positions[b as usize],
                self.positions[c as usize],
            ]
        })
    }

    /// Appends another mesh, offsetting its indices.
    pub fn merge(&mut self, other: &PolyhedronMesh) {
        #[allow(clippy::cast_possible_truncation)]
        let offset = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.indices.extend(
            other
                .indices
                .iter()
                .map(|&[a, b, c]| [a + offset, b + offset, c + offset]),
        );
    }
}

/// Unnormalized normal of triangle `(a, b, c)`.
#[must_use]
pub fn triangle_normal(a: &Point3, b: &Point3, c: &Point3) -> Vector3 {
    (b - a).cross(&(c - a))
}

/// Identity key of a position after rounding each coordinate to a fixed
/// number of decimal places.
///
/// Two positions that round to the same key are treated as one vertex,
/// even if they are not truly coincident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexKey([i64; 3]);

impl VertexKey {
    /// Keys `point` at `precision` decimal places.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(point: &Point3, precision: u32) -> Self {
        let scale = 10_f64.powi(i32::try_from(precision).unwrap_or(i32::MAX));
        let q = |c: f64| (c * scale).round() as i64;
        Self([q(point.x), q(point.y), q(point.z)])
    }
}
