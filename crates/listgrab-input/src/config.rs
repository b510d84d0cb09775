use listgrab_animation::TweenSpec;
use listgrab_core::Duration;

use crate::gesture_constants::{
    DOUBLE_CLICK_INTERVAL_MAX, DOUBLE_CLICK_INTERVAL_MIN, DRAG_DEADZONE, MAGNETIZE_DURATION,
};

/// How presses on an item are interpreted. Fixed per item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DragMode {
    /// Every press immediately grabs the item and magnetizes it to the hand.
    #[default]
    SingleClickDrag,
    /// Presses count as clicks; movement past the deadzone cancels the click
    /// and is reported as a drag.
    Disambiguate,
}

/// Double-click timing window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickTiming {
    pub double_click_interval_min: Duration,
    pub double_click_interval_max: Duration,
}

impl ClickTiming {
    pub fn with_interval_max(mut self, max: Duration) -> Self {
        self.double_click_interval_max = max;
        self
    }

    pub fn with_interval_min(mut self, min: Duration) -> Self {
        self.double_click_interval_min = min;
        self
    }

    /// Whether a press `since_last_click` after the previous one completes a
    /// double click. Both bounds are inclusive.
    pub fn is_double_click(&self, since_last_click: Duration) -> bool {
        since_last_click >= self.double_click_interval_min
            && since_last_click <= self.double_click_interval_max
    }

    /// How long a first press waits for a second one before resolving as a
    /// single click.
    pub fn single_click_wait(&self) -> Duration {
        self.double_click_interval_max
    }
}

impl Default for ClickTiming {
    fn default() -> Self {
        Self {
            double_click_interval_min: DOUBLE_CLICK_INTERVAL_MIN,
            double_click_interval_max: DOUBLE_CLICK_INTERVAL_MAX,
        }
    }
}

/// Per-item gesture configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    pub mode: DragMode,
    pub timing: ClickTiming,
    /// See [`DRAG_DEADZONE`].
    pub drag_deadzone: f32,
    pub magnetize: TweenSpec,
}

impl GestureConfig {
    pub fn single_click_drag() -> Self {
        Self::default().with_mode(DragMode::SingleClickDrag)
    }

    pub fn disambiguate() -> Self {
        Self::default().with_mode(DragMode::Disambiguate)
    }

    pub fn with_mode(mut self, mode: DragMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_timing(mut self, timing: ClickTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_drag_deadzone(mut self, deadzone: f32) -> Self {
        if deadzone.is_finite() && deadzone >= 0.0 {
            self.drag_deadzone = deadzone;
        } else {
            log::warn!("GestureConfig: ignoring invalid drag deadzone {deadzone}");
        }
        self
    }

    pub fn with_magnetize_duration(mut self, duration: Duration) -> Self {
        self.magnetize = TweenSpec::new(duration);
        self
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            mode: DragMode::default(),
            timing: ClickTiming::default(),
            drag_deadzone: DRAG_DEADZONE,
            magnetize: TweenSpec::new(MAGNETIZE_DURATION),
        }
    }
}
