//! Resource definitions
//!
//! Renderer-agnostic data for drawable objects:
//! - [`Geometry`]: shape descriptors and generated [`MeshData`]
//! - [`Material`]: flat colour and face culling
//! - [`Mesh`]: geometry + material

pub mod geometry;
pub mod material;
pub mod mesh;
pub mod primitives;

pub use geometry::{BoundingBox, Geometry, MeshData};
pub use material::{Material, Side, hex_to_rgb};
pub use mesh::Mesh;
