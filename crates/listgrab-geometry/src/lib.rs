//! Pure 3D math for listgrab
//!
//! Vectors, rotations and rigid poses used to track ray origins and to move
//! dragged list items between poses.

mod geometry;
mod lerp;

pub use geometry::*;
pub use lerp::*;

pub mod prelude {
    pub use crate::geometry::{Pose, Quat, Vec3};
    pub use crate::lerp::Lerp;
}
