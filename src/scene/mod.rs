//! Scene graph
//!
//! - [`Node`]: named transform with an optional mesh
//! - [`Transform`]: position / rotation / scale with matrix caching
//! - [`Scene`]: owns nodes, meshes, lights, the camera and animation players
//! - [`Camera`]: perspective projection and frustum
//! - [`Light`]: ambient and point lights

pub mod camera;
pub mod light;
pub mod node;
pub mod scene;
pub mod transform;

pub use camera::{Camera, Frustum};
pub use light::{Light, LightKind};
pub use node::Node;
pub use scene::Scene;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
    pub struct MeshKey;
}
