use std::collections::HashSet;

use glam::Vec2;

/// Pointer buttons the orbit controls react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Rotate
    Primary,
    /// Pan
    Secondary,
}

/// Per-frame pointer state, fed by whatever windowing layer hosts the app.
#[derive(Default, Debug, Clone)]
pub struct Input {
    /// Cursor position inside the window, in pixels
    pub cursor_position: Vec2,
    /// Cursor movement since the previous frame
    pub cursor_delta: Vec2,
    /// Scroll accumulated this frame (lines)
    pub scroll_delta: Vec2,
    /// Window size in pixels
    pub screen_size: Vec2,
    pub buttons: HashSet<PointerButton>,
}

impl Input {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears per-frame deltas so controls stop moving when input stops.
    pub fn end_frame(&mut self) {
        self.cursor_delta = Vec2::ZERO;
        self.scroll_delta = Vec2::ZERO;
    }

    pub fn handle_resize(&mut self, width: u32, height: u32) {
        self.screen_size = Vec2::new(width as f32, height as f32);
    }

    pub fn handle_cursor_move(&mut self, x: f32, y: f32) {
        let new_pos = Vec2::new(x, y);
        // The very first event only establishes the position.
        if self.cursor_position != Vec2::ZERO {
            self.cursor_delta += new_pos - self.cursor_position;
        }
        self.cursor_position = new_pos;
    }

    pub fn handle_button(&mut self, button: PointerButton, pressed: bool) {
        if pressed {
            self.buttons.insert(button);
        } else {
            self.buttons.remove(&button);
        }
    }

    pub fn handle_scroll(&mut self, lines: Vec2) {
        self.scroll_delta += lines;
    }

    #[must_use]
    pub fn is_button_pressed(&self, button: PointerButton) -> bool {
        self.buttons.contains(&button)
    }
}
