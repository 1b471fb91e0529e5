mod centroid;
mod feature_edges;
mod unique_vertices;

pub use centroid::Centroid;
pub use feature_edges::FeatureEdges;
pub use unique_vertices::UniqueVertices;
