//! Shared gesture thresholds for draggable list items.
//!
//! Distances are in world units (metres for a room-scale VR rig), times are
//! offsets on the host clock.

use listgrab_core::Duration;

pub use listgrab_animation::MAGNETIZE_DURATION;

/// Ray origin travel, from the press position, that cancels a pending click.
///
/// Smaller than typical controller jitter while the trigger is squeezed would
/// make clicks unreliable; larger makes short drags feel sticky.
pub const DRAG_DEADZONE: f32 = 0.025;

/// Longest gap between two presses that still counts as a double click.
/// Also how long a released first press waits before it resolves as a
/// single click.
pub const DOUBLE_CLICK_INTERVAL_MAX: Duration = Duration::from_millis(300);

/// Shortest gap between two presses that counts as a double click.
pub const DOUBLE_CLICK_INTERVAL_MIN: Duration = Duration::ZERO;
