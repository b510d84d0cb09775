//! Magnetize animation for grabbed list items.
//!
//! When an item is picked up it should travel smoothly into the hand rather
//! than pop there. The animator only produces the blend factor; whoever moves
//! the item reads [`MagnetizeAnimator::progress`] when it next updates the pose.

use std::cell::Cell;
use std::rc::Rc;

use listgrab_core::{Duration, FrameScheduler, TaskHandle, TaskPoll};

use crate::tween::TweenSpec;

/// Time for a grabbed item to reach the hand.
pub const MAGNETIZE_DURATION: Duration = Duration::from_millis(500);

/// Frame-driven 0 to 1 progress generator, restarted once per drag.
pub struct MagnetizeAnimator {
    spec: TweenSpec,
    progress: Rc<Cell<f32>>,
    task: Option<TaskHandle>,
}

impl MagnetizeAnimator {
    pub fn new() -> Self {
        Self::with_spec(TweenSpec::new(MAGNETIZE_DURATION))
    }

    pub fn with_spec(spec: TweenSpec) -> Self {
        Self {
            spec,
            progress: Rc::new(Cell::new(0.0)),
            task: None,
        }
    }

    pub fn spec(&self) -> TweenSpec {
        self.spec
    }

    /// Resets progress to 0 and samples it every frame from `started_at`
    /// until it reaches 1. A run already in flight is cancelled.
    pub fn start(&mut self, scheduler: &FrameScheduler, started_at: Duration) {
        self.stop();
        self.progress.set(0.0);

        let progress = Rc::clone(&self.progress);
        let spec = self.spec;
        let task = scheduler.spawn(move |frame_time| {
            let fraction = spec.fraction_at(frame_time.saturating_sub(started_at));
            // Never step backwards if the host delivers an older frame time.
            progress.set(progress.get().max(fraction));
            if fraction >= 1.0 {
                progress.set(1.0);
                log::trace!("MagnetizeAnimator: settled at {frame_time:?}");
                TaskPoll::Ready
            } else {
                TaskPoll::Pending
            }
        });
        self.task = Some(task);
    }

    /// Stops sampling. Progress keeps its last value.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress.get()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(TaskHandle::is_active)
    }
}

impl Default for MagnetizeAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MagnetizeAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MagnetizeAnimator")
            .field("spec", &self.spec)
            .field("progress", &self.progress.get())
            .field("running", &self.is_running())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
