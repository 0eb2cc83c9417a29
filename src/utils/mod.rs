//! Utility Module
//!
//! - [`OrbitControls`]: camera orbit controller for interactive viewing
//! - [`FrameClock`]: wall clock driving the real-time host loop

pub mod orbit_control;
pub mod time;

pub use orbit_control::OrbitControls;
pub use time::FrameClock;
