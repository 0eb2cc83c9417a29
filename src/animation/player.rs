use std::sync::Arc;

use glam::Vec3;

use crate::animation::timeline::{Timeline, TimelineCursor};
use crate::scene::NodeHandle;

/// Binds a shared [`Timeline`] to the position of one scene node.
///
/// The player owns only its cursor; the schedule is shared and the position
/// is borrowed from the node for the duration of each update.
#[derive(Debug, Clone)]
pub struct TimelinePlayer {
    timeline: Arc<Timeline>,
    cursor: TimelineCursor,

    pub target: NodeHandle,
    pub time_scale: f32,
    pub paused: bool,
}

impl TimelinePlayer {
    #[must_use]
    pub fn new(timeline: Arc<Timeline>, target: NodeHandle) -> Self {
        Self {
            timeline,
            cursor: TimelineCursor::default(),
            target,
            time_scale: 1.0,
            paused: false,
        }
    }

    #[must_use]
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    #[inline]
    #[must_use]
    pub fn timeline(&self) -> &Arc<Timeline> {
        &self.timeline
    }

    #[inline]
    #[must_use]
    pub fn cursor(&self) -> TimelineCursor {
        self.cursor
    }

    pub fn play(&mut self) {
        self.paused = false;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Jumps to an absolute playback time and writes the matching position.
    pub fn seek(&mut self, elapsed: f32, position: &mut Vec3) {
        self.cursor = self.timeline.cursor_at(elapsed);
        self.timeline.sample(self.cursor, position);
    }

    /// Advances playback by `dt` seconds (scaled by `time_scale`).
    pub fn update(&mut self, dt: f32, position: &mut Vec3) {
        if self.paused {
            return;
        }
        self.cursor = self
            .timeline
            .tick(self.cursor, dt * self.time_scale, position);
    }
}
