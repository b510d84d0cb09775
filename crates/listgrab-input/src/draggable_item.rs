//! Draggable list item gesture classifier.
//!
//! One item owns the click-run state for its handles and the press position
//! of every ray origin currently pressing on it. The host delivers press
//! events in order per ray origin and ticks the shared [`FrameScheduler`]
//! once per frame; single clicks and the magnetize animation resolve on
//! those ticks.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use listgrab_animation::MagnetizeAnimator;
use listgrab_core::{FrameScheduler, TimeSource};
use listgrab_geometry::{Lerp, Pose, Vec3};
use smallvec::SmallVec;

use crate::config::{DragMode, GestureConfig};
use crate::error::GestureError;
use crate::gestures::ListItemGestures;
use crate::pending_click::{resolve_if_due, spawn_single_click_waiter, ClickRun, FirstPress};
use crate::types::{Handle, HandleEvent, HandlePhase, RayOriginId};

/// Maps a ray origin to the pose a grabbed item should settle into, usually
/// just in front of the controller. `None` leaves the item where it is.
pub type PreviewOriginProvider = Box<dyn Fn(RayOriginId) -> Option<Pose>>;

#[derive(Debug)]
struct ActiveDrag {
    handle: Handle,
    ray_origin: RayOriginId,
    start_pose: Pose,
}

pub struct DraggableListItem<G: ListItemGestures + 'static> {
    config: GestureConfig,
    scheduler: FrameScheduler,
    clock: Rc<dyn TimeSource>,
    gestures: Rc<RefCell<G>>,
    clicks: Rc<RefCell<ClickRun>>,
    // Usually one ray origin per hand.
    drag_starts: SmallVec<[(RayOriginId, Vec3); 2]>,
    drag: Option<ActiveDrag>,
    magnetize: MagnetizeAnimator,
    preview_origin: Option<PreviewOriginProvider>,
}

impl<G: ListItemGestures + 'static> DraggableListItem<G> {
    pub fn new(
        config: GestureConfig,
        scheduler: FrameScheduler,
        clock: Rc<dyn TimeSource>,
        gestures: G,
    ) -> Self {
        Self {
            magnetize: MagnetizeAnimator::with_spec(config.magnetize),
            config,
            scheduler,
            clock,
            gestures: Rc::new(RefCell::new(gestures)),
            clicks: Rc::new(RefCell::new(ClickRun::default())),
            drag_starts: SmallVec::new(),
            drag: None,
            preview_origin: None,
        }
    }

    pub fn set_preview_origin_provider(
        &mut self,
        provider: impl Fn(RayOriginId) -> Option<Pose> + 'static,
    ) {
        self.preview_origin = Some(Box::new(provider));
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn mode(&self) -> DragMode {
        self.config.mode
    }

    pub fn gestures(&self) -> Ref<'_, G> {
        self.gestures.borrow()
    }

    /// Presses in the current click run; 0 when no run is pending.
    pub fn click_count(&self) -> u32 {
        self.clicks.borrow().count
    }

    pub fn is_select_held(&self) -> bool {
        self.clicks.borrow().select_held
    }

    /// Handle whose click run is pending, if any.
    pub fn clicked_handle(&self) -> Option<Handle> {
        self.clicks.borrow().clicked_handle.clone()
    }

    /// Overrides the pending handle. Clearing it stops movement from
    /// cancelling the pending click; the click itself still resolves.
    pub fn set_clicked_handle(&mut self, handle: Option<Handle>) {
        self.clicks.borrow_mut().clicked_handle = handle;
    }

    /// Handle currently being magnetized to a ray origin.
    pub fn dragged_handle(&self) -> Option<&Handle> {
        self.drag.as_ref().map(|drag| &drag.handle)
    }

    /// Blend factor of the active magnetize animation, 0 to 1.
    pub fn drag_lerp(&self) -> f32 {
        self.magnetize.progress()
    }

    /// Where `ray_origin` pressed, while it is pressing.
    pub fn drag_start(&self, ray_origin: RayOriginId) -> Option<Vec3> {
        self.drag_starts
            .iter()
            .find(|(id, _)| *id == ray_origin)
            .map(|(_, start)| *start)
    }

    pub fn dispatch(
        &mut self,
        phase: HandlePhase,
        handle: &Handle,
        event: &HandleEvent,
    ) -> Result<(), GestureError> {
        match phase {
            HandlePhase::DragStarted => {
                self.press_start(handle, event);
                Ok(())
            }
            HandlePhase::Dragging => self.press_move(handle, event),
            HandlePhase::DragEnded => {
                self.press_end(handle, event);
                Ok(())
            }
        }
    }

    /// In [`DragMode::SingleClickDrag`] a press grabs the item even when
    /// another ray origin already holds it; the earlier grab ends first.
    pub fn press_start(&mut self, handle: &Handle, event: &HandleEvent) {
        match self.config.mode {
            DragMode::SingleClickDrag => self.begin_magnetized_drag(handle, event),
            DragMode::Disambiguate => self.count_press(handle, event),
        }
    }

    /// In [`DragMode::SingleClickDrag`] only the ray origin holding the item
    /// moves it; moves from other ray origins are ignored.
    pub fn press_move(&mut self, handle: &Handle, event: &HandleEvent) -> Result<(), GestureError> {
        match self.config.mode {
            DragMode::SingleClickDrag => {
                self.follow_preview_origin(event);
                Ok(())
            }
            DragMode::Disambiguate => self.track_movement(handle, event),
        }
    }

    pub fn press_end(&mut self, handle: &Handle, event: &HandleEvent) {
        self.clicks.borrow_mut().select_held = false;
        self.forget_drag_start(event.ray_origin);

        let held_by_releaser = self
            .drag
            .as_ref()
            .is_some_and(|drag| drag.ray_origin == event.ray_origin);
        if held_by_releaser {
            self.end_drag(event);
        } else {
            log::trace!(
                "release on handle {} from ray origin {} holding no drag",
                handle.id(),
                event.ray_origin
            );
        }
    }

    /// Abandons the pending click run. No single click will fire for it.
    pub fn cancel_single_click(&mut self) {
        let waiter = self.clicks.borrow_mut().reset();
        if let Some(waiter) = waiter {
            waiter.cancel();
        }
    }

    fn begin_magnetized_drag(&mut self, handle: &Handle, event: &HandleEvent) {
        if self.drag.is_some() {
            self.end_drag(event);
        }
        self.drag = Some(ActiveDrag {
            handle: handle.clone(),
            ray_origin: event.ray_origin,
            start_pose: handle.pose(),
        });
        self.magnetize.start(&self.scheduler, self.clock.now());
        log::debug!(
            "handle {} grabbed by ray origin {}",
            handle.id(),
            event.ray_origin
        );
        self.gestures.borrow_mut().on_drag_started(handle, event);
    }

    fn end_drag(&mut self, event: &HandleEvent) {
        if let Some(drag) = self.drag.take() {
            self.magnetize.stop();
            log::debug!("drag of handle {} ended", drag.handle.id());
            self.gestures
                .borrow_mut()
                .on_drag_ended(&drag.handle, event);
        }
    }

    fn follow_preview_origin(&mut self, event: &HandleEvent) {
        let Some(drag) = self
            .drag
            .as_ref()
            .filter(|drag| drag.ray_origin == event.ray_origin)
        else {
            return;
        };
        let Some(target) = self
            .preview_origin
            .as_ref()
            .and_then(|provider| provider(event.ray_origin))
        else {
            return;
        };
        let pose = drag.start_pose.lerp(&target, self.magnetize.progress());
        drag.handle.set_pose(pose);
    }

    fn count_press(&mut self, handle: &Handle, event: &HandleEvent) {
        self.drag = None;
        self.record_drag_start(event);

        let now = self.clock.now();
        let timing = self.config.timing;
        // A run whose window already closed resolves before this press joins
        // it, even if no frame has ticked since.
        if !self.clicks.borrow().completes_double_click(&timing, now) {
            resolve_if_due(&self.clicks, &self.gestures, timing, now);
        }

        let double_click = {
            let mut run = self.clicks.borrow_mut();
            if run.count == 0 {
                run.clicked_handle = Some(handle.clone());
                run.first_press = Some(FirstPress {
                    handle: handle.clone(),
                    event: *event,
                    at: now,
                });
                run.waiter = Some(spawn_single_click_waiter(
                    &self.scheduler,
                    Rc::clone(&self.clicks),
                    Rc::clone(&self.gestures),
                    timing,
                ));
            }
            run.count += 1;
            run.select_held = true;

            let since_last = run.last_click.map(|last| now.saturating_sub(last));
            run.last_click = Some(now);
            run.count > 1
                && since_last.is_some_and(|elapsed| timing.is_double_click(elapsed))
        };

        if double_click {
            self.cancel_single_click();
            log::debug!("double click on handle {} at {now:?}", handle.id());
            self.gestures.borrow_mut().on_double_click(handle, event);
        }
    }

    fn track_movement(&mut self, handle: &Handle, event: &HandleEvent) -> Result<(), GestureError> {
        let Some(drag_start) = self.drag_start(event.ray_origin) else {
            log::warn!(
                "DraggableListItem: move from ray origin {} without a press; dropping it",
                event.ray_origin
            );
            return Err(GestureError::UnknownRayOrigin {
                ray_origin: event.ray_origin,
            });
        };

        let distance = event.position.distance(drag_start);
        let pending = self.clicks.borrow().clicked_handle.is_some();
        if pending && distance > self.config.drag_deadzone {
            log::debug!(
                "ray origin {} left the deadzone ({distance:.3}); cancelling click",
                event.ray_origin
            );
            self.cancel_single_click();
        }

        self.gestures
            .borrow_mut()
            .on_single_click_drag(handle, event, drag_start);
        Ok(())
    }

    fn record_drag_start(&mut self, event: &HandleEvent) {
        match self
            .drag_starts
            .iter_mut()
            .find(|(id, _)| *id == event.ray_origin)
        {
            Some((_, start)) => *start = event.position,
            None => self.drag_starts.push((event.ray_origin, event.position)),
        }
    }

    fn forget_drag_start(&mut self, ray_origin: RayOriginId) {
        self.drag_starts.retain(|(id, _)| *id != ray_origin);
    }
}

impl<G: ListItemGestures + 'static> Drop for DraggableListItem<G> {
    fn drop(&mut self) {
        self.cancel_single_click();
        self.magnetize.stop();
    }
}

impl<G: ListItemGestures + 'static> std::fmt::Debug for DraggableListItem<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraggableListItem")
            .field("config", &self.config)
            .field("clicks", &self.clicks.borrow())
            .field("drag_starts", &self.drag_starts)
            .field("drag", &self.drag)
            .field("magnetize", &self.magnetize)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/draggable_item_tests.rs"]
mod tests;
