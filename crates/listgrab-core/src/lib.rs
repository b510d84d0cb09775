//! Host services for listgrab: a wall clock and a cooperative frame scheduler.
//!
//! Everything here is single-threaded. The host drives [`FrameScheduler::tick`]
//! once per frame; long-lived behaviours are registered as frame tasks that
//! yield until their condition is met.

mod clock;
mod frame_clock;

pub use clock::{ManualClock, SystemClock, TimeSource};
pub use frame_clock::{FrameScheduler, TaskHandle, TaskId, TaskPoll};
pub use web_time::Duration;

pub mod prelude {
    pub use crate::clock::{ManualClock, SystemClock, TimeSource};
    pub use crate::frame_clock::{FrameScheduler, TaskHandle, TaskPoll};
}
