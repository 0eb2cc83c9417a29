//! Scripted motion.
//!
//! - [`Easing`]: progress reshaping curves
//! - [`MotionSegment`] / [`MotionPath`]: one timed leg and its update rule
//! - [`Timeline`]: an immutable, endlessly looping list of segments
//! - [`TimelinePlayer`]: binds a timeline to a scene node

pub mod easing;
pub mod player;
pub mod segment;
pub mod timeline;

pub use easing::Easing;
pub use player::TimelinePlayer;
pub use segment::{MotionPath, MotionSegment, PathFn};
pub use timeline::{Timeline, TimelineBuilder, TimelineCursor};
