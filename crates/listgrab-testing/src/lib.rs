//! Testing utilities and harness for listgrab

pub mod recording;
pub mod robot;

pub use recording::{GestureKind, GestureRecord, RecordingGestures};
pub use robot::{GestureRobot, FRAME_INTERVAL};

pub mod prelude {
    pub use crate::recording::{GestureKind, GestureRecord, RecordingGestures};
    pub use crate::robot::{GestureRobot, FRAME_INTERVAL};
}
