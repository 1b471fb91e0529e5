pub mod polyhedron;
pub mod shape_kind;

pub use polyhedron::{PolyhedronMesh, VertexKey};
pub use shape_kind::ShapeKind;
