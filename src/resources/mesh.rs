use crate::resources::geometry::{BoundingBox, Geometry, MeshData};
use crate::resources::material::Material;

/// A drawable: shape descriptor plus surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mesh {
    pub geometry: Geometry,
    pub material: Material,
}

impl Mesh {
    #[must_use]
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self { geometry, material }
    }

    #[inline]
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        self.geometry.bounding_box()
    }

    /// Generates the vertex data a renderer would upload.
    #[must_use]
    pub fn build(&self) -> MeshData {
        self.geometry.build()
    }
}
