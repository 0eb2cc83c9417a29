#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod app;
pub mod city;
pub mod errors;
pub mod resources;
pub mod scene;
pub mod settings;
pub mod utils;

pub use animation::{Easing, MotionPath, MotionSegment, Timeline, TimelineCursor, TimelinePlayer};
pub use app::{App, FrameRenderer, Input, LogRenderer};
pub use city::{CityScene, build_city};
pub use errors::{CityError, Result};
pub use resources::{Geometry, Material, Mesh};
pub use scene::{Camera, Light, Node, NodeHandle, Scene, Transform};
pub use settings::CitySettings;
pub use utils::OrbitControls;
