use glam::Vec3;

use crate::resources::hex_to_rgb;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    /// Uniform light from every direction.
    Ambient,
    /// Omnidirectional light at `position`. A `range` of 0 means unlimited.
    Point { position: Vec3, range: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub color: Vec3,
    pub intensity: f32,
    pub kind: LightKind,
}

impl Light {
    #[must_use]
    pub fn new_ambient(color: u32, intensity: f32) -> Self {
        Self {
            color: hex_to_rgb(color),
            intensity,
            kind: LightKind::Ambient,
        }
    }

    #[must_use]
    pub fn new_point(color: u32, intensity: f32, position: Vec3) -> Self {
        Self {
            color: hex_to_rgb(color),
            intensity,
            kind: LightKind::Point {
                position,
                range: 0.0,
            },
        }
    }
}
