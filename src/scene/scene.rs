use log::warn;
use slotmap::SlotMap;

use crate::animation::TimelinePlayer;
use crate::errors::{CityError, Result};
use crate::resources::Mesh;
use crate::scene::camera::Camera;
use crate::scene::light::Light;
use crate::scene::node::Node;
use crate::scene::transform::Transform;
use crate::scene::{MeshKey, NodeHandle};

/// Scene container.
///
/// Owns every node, mesh, light and animation player, plus the one camera.
/// The host owns the `Scene`; players only borrow the position of their
/// target node while [`Scene::update`] runs.
pub struct Scene {
    pub nodes: SlotMap<NodeHandle, Node>,
    pub meshes: SlotMap<MeshKey, Mesh>,
    pub lights: Vec<Light>,

    pub camera: Camera,
    camera_node: NodeHandle,

    players: Vec<TimelinePlayer>,
}

impl Scene {
    /// Creates an empty scene with a camera node named `"Camera"`.
    #[must_use]
    pub fn new(camera: Camera) -> Self {
        let mut nodes = SlotMap::with_key();
        let camera_node = nodes.insert(Node::new("Camera"));
        Self {
            nodes,
            meshes: SlotMap::with_key(),
            lights: Vec::new(),
            camera,
            camera_node,
            players: Vec::new(),
        }
    }

    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        self.nodes.insert(node)
    }

    /// Inserts `mesh` and a node carrying it.
    pub fn add_mesh(&mut self, name: &'static str, mesh: Mesh, transform: Transform) -> NodeHandle {
        let key = self.meshes.insert(mesh);
        let mut node = Node::new(name).with_transform(transform);
        node.mesh = Some(key);
        self.nodes.insert(node)
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Registers a player. Fails if its target node does not exist.
    pub fn add_player(&mut self, player: TimelinePlayer) -> Result<()> {
        if !self.nodes.contains_key(player.target) {
            return Err(CityError::NodeNotFound(format!("{:?}", player.target)));
        }
        self.players.push(player);
        Ok(())
    }

    #[must_use]
    pub fn players(&self) -> &[TimelinePlayer] {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut [TimelinePlayer] {
        &mut self.players
    }

    #[inline]
    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    #[inline]
    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    /// First node with the given name.
    #[must_use]
    pub fn find_node_by_name(&self, name: &str) -> Option<NodeHandle> {
        self.nodes
            .iter()
            .find_map(|(handle, node)| (node.name == name).then_some(handle))
    }

    #[inline]
    #[must_use]
    pub fn camera_node(&self) -> NodeHandle {
        self.camera_node
    }

    pub fn camera_transform_mut(&mut self) -> Option<&mut Transform> {
        self.nodes
            .get_mut(self.camera_node)
            .map(|node| &mut node.transform)
    }

    /// Visible nodes that carry a mesh, with the mesh.
    pub fn iter_meshes(&self) -> impl Iterator<Item = (&Node, &Mesh)> {
        self.nodes.values().filter(|node| node.visible).filter_map(|node| {
            node.mesh
                .and_then(|key| self.meshes.get(key))
                .map(|mesh| (node, mesh))
        })
    }

    /// Advances every player by `dt` seconds, then refreshes matrices.
    pub fn update(&mut self, dt: f32) {
        for player in &mut self.players {
            match self.nodes.get_mut(player.target) {
                Some(node) => player.update(dt, &mut node.transform.position),
                None => warn!("Animation target {:?} was removed", player.target),
            }
        }
        self.update_matrices();
    }

    /// Rebuilds dirty node matrices and the camera view.
    pub fn update_matrices(&mut self) {
        for node in self.nodes.values_mut() {
            if node.transform.update_local_matrix() {
                let local = node.transform.local_matrix;
                node.transform.set_world_matrix(local);
            }
        }

        if let Some(node) = self.nodes.get(self.camera_node) {
            self.camera.update_view_projection(node.world_matrix());
        }
    }
}
