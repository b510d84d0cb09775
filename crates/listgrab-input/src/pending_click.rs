//! Pending single-click resolution.
//!
//! The first press of a click run cannot be reported straight away: a second
//! press may still turn it into a double click. The run resolves once the
//! trigger is released and the double-click window has closed, firing a
//! single click if it still holds exactly one press. A frame task checks this
//! every tick, and the next press checks it again before counting itself, so
//! the outcome does not depend on how often the host ticks.

use std::cell::RefCell;
use std::rc::Rc;

use listgrab_core::{Duration, FrameScheduler, TaskHandle, TaskPoll};

use crate::config::ClickTiming;
use crate::gestures::ListItemGestures;
use crate::types::{Handle, HandleEvent};

/// The press that opened a click run.
#[derive(Clone, Debug)]
pub(crate) struct FirstPress {
    pub(crate) handle: Handle,
    pub(crate) event: HandleEvent,
    pub(crate) at: Duration,
}

/// Consecutive presses on one item.
#[derive(Debug, Default)]
pub(crate) struct ClickRun {
    pub(crate) count: u32,
    pub(crate) select_held: bool,
    pub(crate) last_click: Option<Duration>,
    /// Handle of the first press while a run is pending.
    pub(crate) clicked_handle: Option<Handle>,
    pub(crate) first_press: Option<FirstPress>,
    pub(crate) waiter: Option<TaskHandle>,
}

impl ClickRun {
    /// Ends the run without reporting anything. Returns the waiter so the
    /// caller can cancel it outside the borrow.
    pub(crate) fn reset(&mut self) -> Option<TaskHandle> {
        self.count = 0;
        self.clicked_handle = None;
        self.first_press = None;
        self.waiter.take()
    }

    /// Whether a press at `now` would be the second click of a double click.
    pub(crate) fn completes_double_click(&self, timing: &ClickTiming, now: Duration) -> bool {
        self.count > 0
            && self
                .last_click
                .is_some_and(|last| timing.is_double_click(now.saturating_sub(last)))
    }

    fn is_due(&self, timing: &ClickTiming, now: Duration) -> bool {
        !self.select_held
            && self
                .first_press
                .as_ref()
                .is_some_and(|first| now.saturating_sub(first.at) >= timing.single_click_wait())
    }
}

/// Closes the run if it is released and its window has passed, firing the
/// single click when it holds one press. Returns `true` when no run is left
/// pending.
pub(crate) fn resolve_if_due<G>(
    run: &RefCell<ClickRun>,
    gestures: &RefCell<G>,
    timing: ClickTiming,
    now: Duration,
) -> bool
where
    G: ListItemGestures + ?Sized,
{
    let (single_click, _waiter) = {
        let mut run = run.borrow_mut();
        if run.first_press.is_none() {
            return true;
        }
        if !run.is_due(&timing, now) {
            return false;
        }
        let fire = run.count == 1;
        let first = run.first_press.take();
        (first.filter(|_| fire), run.reset())
    };

    match single_click {
        Some(first) => {
            log::debug!("single click on handle {} at {now:?}", first.handle.id());
            gestures
                .borrow_mut()
                .on_single_click(&first.handle, &first.event);
        }
        None => log::trace!("click run closed at {now:?} without a click"),
    }
    true
}

/// Spawns the frame task that resolves the run once it is due.
pub(crate) fn spawn_single_click_waiter<G>(
    scheduler: &FrameScheduler,
    run: Rc<RefCell<ClickRun>>,
    gestures: Rc<RefCell<G>>,
    timing: ClickTiming,
) -> TaskHandle
where
    G: ListItemGestures + 'static,
{
    scheduler.spawn(move |frame_time| {
        if resolve_if_due(&run, &gestures, timing, frame_time) {
            TaskPoll::Ready
        } else {
            TaskPoll::Pending
        }
    })
}
