use std::collections::HashMap;

use crate::constants::{DEDUP_PRECISION, EDGE_THRESHOLD_DEG};
use crate::geometry::polyhedron::triangle_normal;
use crate::geometry::{PolyhedronMesh, VertexKey};
use crate::math::{Point3, Vector3, TOLERANCE};

/// A straight polyhedron edge between two positions.
pub type Edge = (Point3, Point3);

/// An edge seen on one triangle, waiting for its neighbour.
struct HalfSeen {
    start: Point3,
    end: Point3,
    normal: Vector3,
}

/// Extracts the feature edges of a triangle mesh.
///
/// Triangle edges are matched across faces by the keys of their endpoint
/// positions. A shared edge is kept when the angle between its two face
/// normals exceeds the threshold, so the diagonal of a triangulated flat quad
/// disappears. Edges used by a single face are kept as boundary edges.
/// Every undirected edge is reported once, in the order it was first seen
/// (boundary edges after all shared ones).
pub struct FeatureEdges<'a> {
    mesh: &'a PolyhedronMesh,
    threshold_deg: f64,
    precision: u32,
}

impl<'a> FeatureEdges<'a> {
    /// Creates a new `FeatureEdges` query with the default 1° threshold.
    #[must_use]
    pub fn new(mesh: &'a PolyhedronMesh) -> Self {
        Self {
            mesh,
            threshold_deg: EDGE_THRESHOLD_DEG,
            precision: DEDUP_PRECISION,
        }
    }

    /// Overrides the dihedral threshold angle in degrees.
    #[must_use]
    pub fn with_threshold_angle(mut self, degrees: f64) -> Self {
        self.threshold_deg = degrees;
        self
    }

    /// Overrides the decimal precision used to match endpoints.
    #[must_use]
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> Vec<Edge> {
        let cos_threshold = self.threshold_deg.to_radians().cos();
        let mut open: HashMap<(VertexKey, VertexKey), usize> = HashMap::new();
        let mut pending: Vec<Option<HalfSeen>> = Vec::new();
        let mut edges = Vec::new();

        for [a, b, c] in self.mesh.triangles() {
            let keys = [a, b, c].map(|p| VertexKey::new(&p, self.precision));
            if keys[0] == keys[1] || keys[1] == keys[2] || keys[2] == keys[0] {
                continue;
            }
            let normal = triangle_normal(&a, &b, &c);
            let len = normal.norm();
            if len < TOLERANCE {
                continue;
            }
            let normal = normal / len;

            let corners = [a, b, c];
            for i in 0..3 {
                let j = (i + 1) % 3;
                let key = if keys[i] < keys[j] {
                    (keys[i], keys[j])
                } else {
                    (keys[j], keys[i])
                };

                if let Some(slot) = open.remove(&key) {
                    if let Some(first) = pending[slot].take() {
                        if first.normal.dot(&normal) <= cos_threshold {
                            edges.push((first.start, first.end));
                        }
                    }
                } else {
                    open.insert(key, pending.len());
                    pending.push(Some(HalfSeen {
                        start: corners[i],
                        end: corners[j],
                        normal,
                    }));
                }
            }
        }

        edges.extend(pending.into_iter().flatten().map(|e| (e.start, e.end)));
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ShapeKind;
    use crate::operations::creation::MakePolyhedron;

    fn edges(kind: ShapeKind) -> Vec<Edge> {
        FeatureEdges::new(&MakePolyhedron::new(kind).execute()).execute()
    }

    #[test]
    fn counts_per_shape() {
        assert_eq!(edges(ShapeKind::Tetrahedron).len(), 6);
        assert_eq!(edges(ShapeKind::Cube).len(), 12);
        assert_eq!(edges(ShapeKind::Octahedron).len(), 12);
    }

    #[test]
    fn cube_edges_are_axis_aligned_with_side_two() {
        for (a, b) in edges(ShapeKind::Cube) {
            let d = b - a;
            assert!((d.norm() - 2.0).abs() < 1e-12);
            let nonzero = [d.x, d.y, d.z].iter().filter(|c| c.abs() > 1e-12).count();
            assert_eq!(nonzero, 1, "diagonal edge survived: {a} -> {b}");
        }
    }

    #[test]
    fn no_edge_is_reported_twice() {
        for kind in ShapeKind::ALL {
            let list = edges(kind);
            for (i, (a, b)) in list.iter().enumerate() {
                for (c, d) in &list[i + 1..] {
                    let same = (a == c && b == d) || (a == d && b == c);
                    assert!(!same, "{kind}: duplicate edge {a} -> {b}");
                }
            }
        }
    }

    #[test]
    fn huge_threshold_keeps_only_boundaries() {
        let mesh = MakePolyhedron::new(ShapeKind::Octahedron).execute();
        let list = FeatureEdges::new(&mesh).with_threshold_angle(179.0).execute();
        assert!(list.is_empty());
    }

    #[test]
    fn open_triangle_yields_its_boundary() {
        let mesh = PolyhedronMesh::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        );
        assert_eq!(FeatureEdges::new(&mesh).execute().len(), 3);
    }

    #[test]
    fn degenerate_triangle_is_skipped() {
        let mesh = PolyhedronMesh::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.000_1, 0.0, 0.0),
            ],
            vec![[0, 1, 2]],
        );
        assert!(FeatureEdges::new(&mesh).execute().is_empty());
    }
}
