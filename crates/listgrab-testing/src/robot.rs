//! Robot-style driver for gesture tests
//!
//! Owns a [`ManualClock`] and a [`FrameScheduler`] and steps them together in
//! fixed frames, so scripted presses, moves and releases land at exact times.
//!
//! # Example
//!
//! ```
//! use listgrab_core::Duration;
//! use listgrab_geometry::{Pose, Vec3};
//! use listgrab_input::{GestureConfig, Handle};
//! use listgrab_testing::GestureRobot;
//!
//! let (mut robot, gestures) = GestureRobot::recording(GestureConfig::disambiguate());
//! let handle = Handle::new(1, Pose::IDENTITY);
//!
//! robot.click(&handle, 0, Vec3::ZERO, Duration::from_millis(50));
//! robot.advance(Duration::from_millis(400));
//!
//! assert_eq!(gestures.single_clicks(), 1);
//! ```

use std::rc::Rc;

use listgrab_core::{Duration, FrameScheduler, ManualClock, TimeSource};
use listgrab_geometry::Vec3;
use listgrab_input::{
    DraggableListItem, GestureConfig, GestureError, Handle, HandleEvent, ListItemGestures,
    RayOriginId,
};

use crate::recording::RecordingGestures;

/// ~60 FPS.
pub const FRAME_INTERVAL: Duration = Duration::from_nanos(16_666_667);

pub struct GestureRobot<G: ListItemGestures + 'static> {
    clock: ManualClock,
    scheduler: FrameScheduler,
    item: DraggableListItem<G>,
    frame_interval: Duration,
}

impl GestureRobot<RecordingGestures> {
    /// Robot whose item records every gesture. The returned recorder shares
    /// its log with the one inside the item.
    pub fn recording(config: GestureConfig) -> (Self, RecordingGestures) {
        let clock = ManualClock::new();
        let gestures = RecordingGestures::new(clock.clone());
        let robot = Self::with_clock(config, clock, gestures.clone());
        (robot, gestures)
    }
}

impl<G: ListItemGestures + 'static> GestureRobot<G> {
    pub fn new(config: GestureConfig, gestures: G) -> Self {
        Self::with_clock(config, ManualClock::new(), gestures)
    }

    pub fn with_clock(config: GestureConfig, clock: ManualClock, gestures: G) -> Self {
        let scheduler = FrameScheduler::new();
        let item = DraggableListItem::new(
            config,
            scheduler.clone(),
            Rc::new(clock.clone()),
            gestures,
        );
        Self {
            clock,
            scheduler,
            item,
            frame_interval: FRAME_INTERVAL,
        }
    }

    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        if interval.is_zero() {
            log::warn!("GestureRobot: zero frame interval ignored");
        } else {
            self.frame_interval = interval;
        }
        self
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn item(&self) -> &DraggableListItem<G> {
        &self.item
    }

    pub fn item_mut(&mut self) -> &mut DraggableListItem<G> {
        &mut self.item
    }

    pub fn press(&mut self, handle: &Handle, ray_origin: RayOriginId, position: Vec3) {
        self.item
            .press_start(handle, &HandleEvent::new(ray_origin, position));
    }

    pub fn move_to(
        &mut self,
        handle: &Handle,
        ray_origin: RayOriginId,
        position: Vec3,
    ) -> Result<(), GestureError> {
        self.item
            .press_move(handle, &HandleEvent::new(ray_origin, position))
    }

    pub fn release(&mut self, handle: &Handle, ray_origin: RayOriginId, position: Vec3) {
        self.item
            .press_end(handle, &HandleEvent::new(ray_origin, position));
    }

    /// Press, hold for `hold`, release in place.
    pub fn click(&mut self, handle: &Handle, ray_origin: RayOriginId, position: Vec3, hold: Duration) {
        self.press(handle, ray_origin, position);
        self.advance(hold);
        self.release(handle, ray_origin, position);
    }

    /// Steps frames until `duration` has passed. The last frame lands
    /// exactly on the target time.
    pub fn advance(&mut self, duration: Duration) {
        let target = self.now() + duration;
        self.advance_to(target);
    }

    pub fn advance_to(&mut self, target: Duration) {
        while self.now() < target {
            let next = (self.now() + self.frame_interval).min(target);
            self.step_to(next);
        }
    }

    pub fn advance_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            let next = self.now() + self.frame_interval;
            self.step_to(next);
        }
    }

    /// Steps frames until no task is pending. Returns `false` if `limit`
    /// passed first.
    pub fn wait_for_idle(&mut self, limit: Duration) -> bool {
        let deadline = self.now() + limit;
        while !self.scheduler.is_idle() {
            if self.now() >= deadline {
                return false;
            }
            let next = (self.now() + self.frame_interval).min(deadline);
            self.step_to(next);
        }
        true
    }

    fn step_to(&mut self, time: Duration) {
        self.clock.set(time);
        self.scheduler.tick(time);
    }
}
