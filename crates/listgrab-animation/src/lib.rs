//! Animation system for listgrab
//!
//! Time-based tweens sampled by the frame scheduler. The magnetize animator
//! eases a grabbed list item into the hand instead of popping it there.

mod magnetize;
mod tween;

pub use listgrab_geometry::Lerp;
pub use magnetize::*;
pub use tween::*;
