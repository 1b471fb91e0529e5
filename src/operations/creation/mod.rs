mod make_cube;
mod make_octahedron;
mod make_polyhedron;
mod make_tetrahedron;

pub use make_cube::MakeCube;
pub use make_octahedron::MakeOctahedron;
pub use make_polyhedron::MakePolyhedron;
pub use make_tetrahedron::MakeTetrahedron;
