use std::borrow::Cow;

use glam::Affine3A;

use crate::scene::MeshKey;
use crate::scene::transform::Transform;

/// A scene node: a named transform with an optional mesh attached.
///
/// The city scene is flat, so there is no parent/child hierarchy; a node's
/// world matrix is its local matrix.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: Cow<'static, str>,
    pub transform: Transform,
    pub mesh: Option<MeshKey>,
    /// Hidden nodes are skipped by renderers.
    pub visible: bool,
}

impl Node {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::new(),
            mesh: None,
            visible: true,
        }
    }

    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.transform.world_matrix
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new("Node")
    }
}
