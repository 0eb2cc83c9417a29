//! City Settings
//!
//! Host-facing configuration: window size, camera projection and start
//! position, animation speed, orbit damping. All fields have defaults that
//! reproduce the stock scene, so a settings file only lists what it changes.
//!
//! ```rust,ignore
//! use lowpoly_city::settings::CitySettings;
//!
//! let settings = CitySettings::from_json_str(r#"{ "animation_speed": 2.0 }"#)?;
//! assert_eq!(settings.width, 1280);
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::errors::{CityError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CitySettings {
    /// Initial window width in pixels.
    pub width: u32,
    /// Initial window height in pixels.
    pub height: u32,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Where the camera starts; it orbits the origin from here.
    pub camera_position: Vec3,
    /// Playback rate of the sphere timeline (1.0 = authored speed).
    pub animation_speed: f32,
    pub enable_damping: bool,
}

impl Default for CitySettings {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            camera_position: Vec3::new(0.0, 30.0, 50.0),
            animation_speed: 1.0,
            enable_damping: false,
        }
    }
}

impl CitySettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        log::info!("Loading settings from {}", path.display());
        Self::from_json_str(&text)
    }

    #[inline]
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CityError::InvalidSettings(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(CityError::InvalidSettings(format!(
                "fov_degrees must be in (0, 180), got {}",
                self.fov_degrees
            )));
        }
        if !(self.near > 0.0 && self.near < self.far && self.far.is_finite()) {
            return Err(CityError::InvalidSettings(format!(
                "clip planes must satisfy 0 < near < far, got near={} far={}",
                self.near, self.far
            )));
        }
        if !self.camera_position.is_finite() {
            return Err(CityError::InvalidSettings(
                "camera_position must be finite".to_string(),
            ));
        }
        if !(self.animation_speed.is_finite() && self.animation_speed > 0.0) {
            return Err(CityError::InvalidSettings(format!(
                "animation_speed must be finite and > 0, got {}",
                self.animation_speed
            )));
        }
        Ok(())
    }
}
