//! WebGPU rendering module
//!
//! The scene is a list of flat-colored rectangles built from `MatchState`.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
