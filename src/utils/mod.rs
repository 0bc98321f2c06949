pub mod cube_faces;
