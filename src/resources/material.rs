use glam::Vec3;

/// Which faces of a surface are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Front,
    Back,
    Double,
}

/// Unlit, flat-coloured surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Linear RGB in `[0, 1]`.
    pub color: Vec3,
    pub side: Side,
}

impl Material {
    #[must_use]
    pub fn new(color: Vec3) -> Self {
        Self {
            color,
            side: Side::Front,
        }
    }

    /// From a `0xRRGGBB` literal.
    #[must_use]
    pub fn from_hex(hex: u32) -> Self {
        Self::new(hex_to_rgb(hex))
    }

    #[must_use]
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(Vec3::ONE)
    }
}

/// Splits `0xRRGGBB` into normalised channels.
#[must_use]
pub fn hex_to_rgb(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    Vec3::new(r, g, b)
}
