use listgrab_core::Duration;
use listgrab_geometry::Lerp;

/// Linear time-based tween: maps elapsed time to a fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    pub duration: Duration,
}

impl TweenSpec {
    pub const fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn millis(duration_millis: u64) -> Self {
        Self::new(Duration::from_millis(duration_millis))
    }

    /// Fraction of the tween completed after `elapsed`. A zero-length tween is
    /// always complete.
    pub fn fraction_at(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// Value between `start` and `target` after `elapsed`.
    pub fn interpolate<T: Lerp>(&self, start: &T, target: &T, elapsed: Duration) -> T {
        start.lerp(target, self.fraction_at(elapsed))
    }
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self::millis(300)
    }
}
