pub mod box_shape;
pub mod circle;
pub mod plane;
pub mod sphere;

pub use box_shape::create_box;
pub use circle::{CircleOptions, create_circle};
pub use plane::{PlaneOptions, create_plane};
pub use sphere::{SphereOptions, create_sphere};
