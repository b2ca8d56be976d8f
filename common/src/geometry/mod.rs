pub use mesh::Mesh;
pub use vertex::{ColoredVertex, PositionVertex};

mod mesh;
pub mod primitives;
mod vertex;
