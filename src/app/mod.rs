//! Host driver
//!
//! [`App`] owns the city, the pointer [`Input`], a [`FrameClock`] and a
//! [`FrameRenderer`], and runs one frame at a time:
//!
//! 1. orbit controls consume this frame's input
//! 2. the scene advances its animation players and matrices
//! 3. the renderer receives the finished scene
//! 4. per-frame input deltas are cleared
//!
//! The app never spawns threads or sleeps; whoever calls [`App::frame`]
//! decides the pace.

pub mod input;
pub mod renderer;

use std::time::Duration;

use glam::Vec3;
use log::{debug, info, warn};

use crate::city::{CityScene, build_city};
use crate::errors::{CityError, Result};
use crate::settings::CitySettings;
use crate::utils::FrameClock;

pub use self::input::{Input, PointerButton};
pub use self::renderer::{FrameRenderer, LogRenderer};

pub struct App<R: FrameRenderer> {
    pub city: CityScene,
    pub input: Input,
    pub renderer: R,

    clock: FrameClock,
    elapsed: f32,
    frame_count: u64,
}

impl<R: FrameRenderer> App<R> {
    /// Builds the city. Fails before any frame runs if the settings or the
    /// animation schedule are invalid.
    pub fn new(settings: &CitySettings, mut renderer: R) -> Result<Self> {
        let city = build_city(settings)?;

        let mut input = Input::new();
        input.handle_resize(settings.width, settings.height);
        renderer.resize(settings.width, settings.height);

        info!("App ready ({}x{})", settings.width, settings.height);

        Ok(Self {
            city,
            input,
            renderer,
            clock: FrameClock::new(),
            elapsed: 0.0,
            frame_count: 0,
        })
    }

    /// Simulated seconds since start.
    #[inline]
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Current position of the animated sphere.
    pub fn sphere_position(&self) -> Result<Vec3> {
        self.city
            .scene
            .get_node(self.city.sphere)
            .map(|node| node.transform.position)
            .ok_or_else(|| CityError::NodeNotFound("Sphere".to_string()))
    }

    /// Runs one frame of `dt` seconds.
    pub fn frame(&mut self, dt: f32) -> Result<()> {
        let scene = &mut self.city.scene;
        let fov = scene.camera.fov_degrees();
        if let Some(transform) = scene.camera_transform_mut() {
            self.city.controls.update(transform, &self.input, fov, dt);
        }

        scene.update(dt);
        self.renderer.render(scene)?;
        self.input.end_frame();

        self.elapsed += dt;
        self.frame_count += 1;
        Ok(())
    }

    /// Fixed-step loop: `count` frames of `dt` seconds each.
    pub fn run_frames(&mut self, count: u32, dt: f32) -> Result<()> {
        for _ in 0..count {
            self.frame(dt)?;
        }
        debug!("Ran {count} frames, t = {:.3}s", self.elapsed);
        Ok(())
    }

    /// Wall-clock loop for `duration`, one frame per clock tick.
    pub fn run_for(&mut self, duration: Duration) -> Result<()> {
        self.clock = FrameClock::new();
        while self.clock.elapsed < duration {
            if let Some(fps) = self.clock.tick() {
                debug!("{fps:.1} fps");
            }
            self.frame(self.clock.dt_seconds())?;
        }
        info!(
            "Ran {} frames in {:.2?}",
            self.clock.frame_count, self.clock.elapsed
        );
        Ok(())
    }

    /// Window resize: camera aspect, input screen size and renderer surface.
    /// Zero-sized (minimised) windows are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            warn!("Ignoring resize to {width}x{height}");
            return;
        }
        self.city
            .scene
            .camera
            .set_aspect(width as f32 / height as f32);
        self.input.handle_resize(width, height);
        self.renderer.resize(width, height);
        debug!("Resized to {width}x{height}");
    }
}
