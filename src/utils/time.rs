#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

const FPS_WINDOW: Duration = Duration::from_secs(1);

/// Wall clock for a real-time frame loop.
///
/// Each [`FrameClock::tick`] measures the frame delta fed to the timeline
/// and, about once a second, reports the average frame rate.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last_tick: Instant,
    pub delta: Duration,
    pub elapsed: Duration,
    pub frame_count: u64,

    window_frames: u32,
    window_time: Duration,
    /// Average over the last completed window, 0 until one completes.
    pub fps: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
            window_frames: 0,
            window_time: Duration::ZERO,
            fps: 0.0,
        }
    }

    /// Samples the clock. Returns the frame rate when a window completes.
    pub fn tick(&mut self) -> Option<f32> {
        let now = Instant::now();
        self.advance(now - self.last_tick);
        self.elapsed = now - self.start;
        self.last_tick = now;
        self.fps_window_closed()
    }

    fn advance(&mut self, delta: Duration) {
        self.delta = delta;
        self.frame_count += 1;
        self.window_frames += 1;
        self.window_time += delta;
    }

    fn fps_window_closed(&mut self) -> Option<f32> {
        if self.window_time < FPS_WINDOW {
            return None;
        }
        self.fps = self.window_frames as f32 / self.window_time.as_secs_f32();
        self.window_frames = 0;
        self.window_time = Duration::ZERO;
        Some(self.fps)
    }

    /// Frame delta in seconds.
    #[inline]
    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_reported_once_per_window() {
        let mut clock = FrameClock::new();
        for _ in 0..59 {
            clock.advance(Duration::from_millis(16));
            assert!(clock.fps_window_closed().is_none());
        }
        clock.advance(Duration::from_millis(56));
        let fps = clock.fps_window_closed().unwrap();
        assert!((fps - 60.0).abs() < 1e-3);
        assert_eq!(clock.frame_count, 60);
        assert!((clock.dt_seconds() - 0.056).abs() < 1e-6);
    }
}
