use log::{debug, trace};

use crate::errors::Result;
use crate::scene::Scene;

/// Consumer of a finished frame.
///
/// The app hands over the scene after animation and matrix updates; an
/// implementation turns it into pixels (or anything else).
pub trait FrameRenderer {
    fn render(&mut self, scene: &Scene) -> Result<()>;

    fn resize(&mut self, width: u32, height: u32);
}

/// Headless renderer that reports what a frame would draw through `log`.
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
    last_visible: usize,
}

impl LogRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Number of meshes inside the view frustum in the last frame.
    #[must_use]
    pub fn last_visible(&self) -> usize {
        self.last_visible
    }
}

impl FrameRenderer for LogRenderer {
    fn render(&mut self, scene: &Scene) -> Result<()> {
        let frustum = scene.camera.frustum();
        self.last_visible = scene
            .iter_meshes()
            .filter(|(node, mesh)| {
                let bounds = mesh.bounding_box().transform(node.world_matrix());
                let radius = bounds.size().length() * 0.5;
                frustum.intersects_sphere(bounds.center(), radius)
            })
            .count();
        self.frames += 1;

        trace!(
            "Frame {}: {} of {} meshes visible, camera at {}",
            self.frames,
            self.last_visible,
            scene.meshes.len(),
            scene.camera.position()
        );
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        debug!("Renderer resized to {width}x{height}");
    }
}
