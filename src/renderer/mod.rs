//! WebGPU rendering module
//!
//! Tessellates each captured frame into flat-colored triangles. Placeholder
//! shapes stand in for sprite art.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
