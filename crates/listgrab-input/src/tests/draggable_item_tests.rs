use super::*;

use crate::config::ClickTiming;
use listgrab_core::{Duration, ManualClock};
use listgrab_geometry::Quat;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
enum Seen {
    Single(u64),
    Double(u64),
    Moved(u64, Vec3),
    Grabbed(u64),
    Released(u64),
}

#[derive(Default)]
struct Log(Rc<RefCell<Vec<Seen>>>);

impl ListItemGestures for Log {
    fn on_single_click(&mut self, handle: &Handle, _event: &HandleEvent) {
        self.0.borrow_mut().push(Seen::Single(handle.id()));
    }

    fn on_double_click(&mut self, handle: &Handle, _event: &HandleEvent) {
        self.0.borrow_mut().push(Seen::Double(handle.id()));
    }

    fn on_single_click_drag(&mut self, handle: &Handle, _event: &HandleEvent, drag_start: Vec3) {
        self.0.borrow_mut().push(Seen::Moved(handle.id(), drag_start));
    }

    fn on_drag_started(&mut self, handle: &Handle, _event: &HandleEvent) {
        self.0.borrow_mut().push(Seen::Grabbed(handle.id()));
    }

    fn on_drag_ended(&mut self, handle: &Handle, _event: &HandleEvent) {
        self.0.borrow_mut().push(Seen::Released(handle.id()));
    }
}

struct Harness {
    clock: ManualClock,
    scheduler: FrameScheduler,
    item: DraggableListItem<Log>,
    seen: Rc<RefCell<Vec<Seen>>>,
}

impl Harness {
    fn new(config: GestureConfig) -> Self {
        let clock = ManualClock::new();
        let scheduler = FrameScheduler::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let item = DraggableListItem::new(
            config,
            scheduler.clone(),
            Rc::new(clock.clone()),
            Log(Rc::clone(&seen)),
        );
        Self {
            clock,
            scheduler,
            item,
            seen,
        }
    }

    fn at(&self, millis: u64) {
        let time = Duration::from_millis(millis);
        self.clock.set(time);
        self.scheduler.tick(time);
    }

    fn seen(&self) -> Vec<Seen> {
        self.seen.borrow().clone()
    }
}

const RAY: RayOriginId = 7;

fn event(x: f32) -> HandleEvent {
    HandleEvent::new(RAY, Vec3::new(x, 0.0, 0.0))
}

#[test]
fn first_press_opens_click_run() {
    let mut h = Harness::new(GestureConfig::disambiguate());
    let handle = Handle::new(1, Pose::IDENTITY);

    h.item.press_start(&handle, &event(0.0));

    assert_eq!(h.item.click_count(), 1);
    assert!(h.item.is_select_held());
    assert_eq!(h.item.clicked_handle(), Some(handle.clone()));
    assert_eq!(h.item.drag_start(RAY), Some(Vec3::ZERO));
    assert_eq!(h.scheduler.pending_tasks(), 1);

    h.item.press_end(&handle, &event(0.0));
    assert!(!h.item.is_select_held());
    assert_eq!(h.item.drag_start(RAY), None);
}

#[test]
fn held_press_defers_single_click() {
    let mut h = Harness::new(GestureConfig::disambiguate());
    let handle = Handle::new(1, Pose::IDENTITY);

    h.at(0);
    h.item.press_start(&handle, &event(0.0));
    h.at(600);
    assert!(h.seen().is_empty(), "held press must not resolve");

    h.item.press_end(&handle, &event(0.0));
    h.at(616);
    assert_eq!(h.seen(), vec![Seen::Single(1)]);
    assert_eq!(h.item.click_count(), 0);
    assert_eq!(h.item.clicked_handle(), None);
}

#[test]
fn small_movement_keeps_pending_click() {
    let mut h = Harness::new(GestureConfig::disambiguate());
    let handle = Handle::new(1, Pose::IDENTITY);

    h.at(0);
    h.item.press_start(&handle, &event(0.0));
    h.item.press_move(&handle, &event(0.02)).unwrap();
    h.item.press_end(&handle, &event(0.02));
    h.at(300);

    assert_eq!(
        h.seen(),
        vec![Seen::Moved(1, Vec3::ZERO), Seen::Single(1)]
    );
}

#[test]
fn leaving_deadzone_cancels_pending_click() {
    let mut h = Harness::new(GestureConfig::disambiguate());
    let handle = Handle::new(1, Pose::IDENTITY);

    h.at(0);
    h.item.press_start(&handle, &event(0.0));
    h.at(50);
    h.item.press_move(&handle, &event(0.03)).unwrap();

    assert_eq!(h.item.click_count(), 0);
    assert_eq!(h.item.clicked_handle(), None);
    assert!(h.scheduler.is_idle());

    h.item.press_end(&handle, &event(0.03));
    h.at(1_000);
    assert_eq!(h.seen(), vec![Seen::Moved(1, Vec3::ZERO)]);
}

#[test]
fn cleared_clicked_handle_ignores_deadzone() {
    let mut h = Harness::new(GestureConfig::disambiguate());
    let handle = Handle::new(1, Pose::IDENTITY);

    h.at(0);
    h.item.press_start(&handle, &event(0.0));
    h.item.set_clicked_handle(None);
    h.item.press_move(&handle, &event(0.5)).unwrap();
    h.item.press_end(&handle, &event(0.5));
    h.at(300);

    assert_eq!(
        h.seen(),
        vec![Seen::Moved(1, Vec3::ZERO), Seen::Single(1)]
    );
}

#[test]
fn move_without_press_is_rejected() {
    let mut h = Harness::new(GestureConfig::disambiguate());
    let handle = Handle::new(1, Pose::IDENTITY);

    let result = h.item.press_move(&handle, &event(1.0));

    assert_eq!(result, Err(GestureError::UnknownRayOrigin { ray_origin: RAY }));
    assert!(h.seen().is_empty());
    assert_eq!(
        result.unwrap_err().to_string(),
        "ray origin 7 moved without a recorded press"
    );
}

#[test]
fn press_after_window_resolves_previous_run_first() {
    let mut h = Harness::new(GestureConfig::disambiguate());
    let handle = Handle::new(1, Pose::IDENTITY);

    h.at(0);
    h.item.press_start(&handle, &event(0.0));
    h.at(400);
    // Held through the window, so the waiter has not resolved yet.
    assert!(h.seen().is_empty());
    h.item.press_end(&handle, &event(0.0));
    h.clock.set(Duration::from_millis(410));
    h.item.press_start(&handle, &event(0.0));

    assert_eq!(h.seen(), vec![Seen::Single(1)]);
    assert_eq!(h.item.click_count(), 1);

    h.item.press_end(&handle, &event(0.0));
    h.at(416);
    assert_eq!(h.seen(), vec![Seen::Single(1)]);
    h.at(710);
    assert_eq!(h.seen(), vec![Seen::Single(1), Seen::Single(1)]);
    assert_eq!(h.item.click_count(), 0);
    assert!(h.scheduler.is_idle());
}

#[test]
fn spaced_presses_resolve_without_any_tick() {
    let mut h = Harness::new(GestureConfig::disambiguate());
    let first = Handle::new(1, Pose::IDENTITY);
    let second = Handle::new(2, Pose::IDENTITY);

    h.item.press_start(&first, &event(0.0));
    h.clock.set(Duration::from_millis(50));
    h.item.press_end(&first, &event(0.0));
    h.clock.set(Duration::from_millis(400));
    h.item.press_start(&second, &event(0.0));

    assert_eq!(h.seen(), vec![Seen::Single(1)]);
    assert_eq!(h.item.clicked_handle(), Some(second.clone()));

    h.clock.set(Duration::from_millis(450));
    h.item.press_end(&second, &event(0.0));
    h.at(700);
    assert_eq!(h.seen(), vec![Seen::Single(1), Seen::Single(2)]);
}

#[test]
fn press_on_window_edge_is_still_a_double_click() {
    let mut h = Harness::new(GestureConfig::disambiguate());
    let handle = Handle::new(1, Pose::IDENTITY);

    h.item.press_start(&handle, &event(0.0));
    h.item.press_end(&handle, &event(0.0));
    h.clock.set(Duration::from_millis(300));
    h.item.press_start(&handle, &event(0.0));

    assert_eq!(h.seen(), vec![Seen::Double(1)]);
    assert!(h.scheduler.is_idle());
}

#[test]
fn double_click_window_uses_configured_bounds() {
    let timing = ClickTiming::default()
        .with_interval_min(Duration::from_millis(50))
        .with_interval_max(Duration::from_millis(200));
    let mut h = Harness::new(GestureConfig::disambiguate().with_timing(timing));
    let handle = Handle::new(3, Pose::IDENTITY);

    h.at(0);
    h.item.press_start(&handle, &event(0.0));
    h.item.press_end(&handle, &event(0.0));
    h.clock.set(Duration::from_millis(20));
    h.item.press_start(&handle, &event(0.0));
    h.item.press_end(&handle, &event(0.0));
    assert!(h.seen().is_empty(), "too fast for a double click");

    h.at(200);
    assert!(h.seen().is_empty(), "two presses never resolve as a single click");
    assert_eq!(h.item.click_count(), 0);
}

#[test]
fn single_click_drag_grabs_on_press() {
    let mut h = Harness::new(GestureConfig::single_click_drag());
    let handle = Handle::new(2, Pose::IDENTITY);

    h.at(0);
    h.item.press_start(&handle, &event(0.0));

    assert_eq!(h.item.dragged_handle(), Some(&handle));
    assert_eq!(h.item.drag_lerp(), 0.0);
    assert_eq!(h.item.click_count(), 0);
    assert_eq!(h.seen(), vec![Seen::Grabbed(2)]);

    h.item.press_end(&handle, &event(0.0));
    assert_eq!(h.item.dragged_handle(), None);
    assert_eq!(h.seen(), vec![Seen::Grabbed(2), Seen::Released(2)]);
    assert!(h.scheduler.is_idle());
}

#[test]
fn single_click_drag_blends_toward_preview_origin() {
    let mut h = Harness::new(GestureConfig::single_click_drag());
    let target = Pose::new(Vec3::new(1.0, 0.0, 0.0), Quat::IDENTITY);
    h.item
        .set_preview_origin_provider(move |ray| (ray == RAY).then_some(target));
    let handle = Handle::new(2, Pose::IDENTITY);

    h.at(0);
    h.item.press_start(&handle, &event(0.0));
    h.at(250);
    h.item.press_move(&handle, &event(0.1)).unwrap();
    assert!((handle.pose().position.x - 0.5).abs() < 1e-6);

    h.at(500);
    h.item.press_move(&handle, &event(0.1)).unwrap();
    assert_eq!(handle.pose(), target);
}

#[test]
fn missing_preview_origin_leaves_pose_untouched() {
    let mut h = Harness::new(GestureConfig::single_click_drag());
    h.item.set_preview_origin_provider(|_| None);
    let start = Pose::from_position(Vec3::new(0.0, 1.0, 0.0));
    let handle = Handle::new(2, start);

    h.at(0);
    h.item.press_start(&handle, &event(0.0));
    h.at(250);
    assert_eq!(h.item.press_move(&handle, &event(0.1)), Ok(()));
    assert_eq!(handle.pose(), start);
}

#[test]
fn dispatch_routes_phases() {
    let mut h = Harness::new(GestureConfig::disambiguate());
    let handle = Handle::new(4, Pose::IDENTITY);

    h.at(0);
    h.item
        .dispatch(HandlePhase::DragStarted, &handle, &event(0.0))
        .unwrap();
    h.item
        .dispatch(HandlePhase::Dragging, &handle, &event(0.01))
        .unwrap();
    h.item
        .dispatch(HandlePhase::DragEnded, &handle, &event(0.01))
        .unwrap();
    h.at(300);

    assert_eq!(
        h.seen(),
        vec![Seen::Moved(4, Vec3::ZERO), Seen::Single(4)]
    );
}

#[test]
fn dropping_item_cancels_pending_work() {
    let h = Harness::new(GestureConfig::disambiguate());
    let Harness {
        clock: _clock,
        scheduler,
        mut item,
        seen,
    } = h;
    let handle = Handle::new(5, Pose::IDENTITY);
    item.press_start(&handle, &event(0.0));
    item.press_end(&handle, &event(0.0));
    assert_eq!(scheduler.pending_tasks(), 1);

    drop(item);
    assert!(scheduler.is_idle());
    scheduler.tick(Duration::from_secs(1));
    assert!(seen.borrow().is_empty());
}

#[test]
fn only_grabbing_ray_moves_and_releases_the_item() {
    let mut h = Harness::new(GestureConfig::single_click_drag());
    let target = Pose::from_position(Vec3::new(1.0, 0.0, 0.0));
    let elsewhere = Pose::from_position(Vec3::new(-1.0, 0.0, 0.0));
    h.item
        .set_preview_origin_provider(move |ray| Some(if ray == RAY { target } else { elsewhere }));
    let handle = Handle::new(6, Pose::IDENTITY);
    let other = HandleEvent::new(RAY + 1, Vec3::ZERO);

    h.at(0);
    h.item.press_start(&handle, &event(0.0));
    h.at(500);
    h.item.press_move(&handle, &other).unwrap();
    assert_eq!(handle.pose(), Pose::IDENTITY);

    h.item.press_end(&handle, &other);
    assert_eq!(h.item.dragged_handle(), Some(&handle));

    h.item.press_move(&handle, &event(0.0)).unwrap();
    assert_eq!(handle.pose(), target);
    h.item.press_end(&handle, &event(0.0));
    assert_eq!(h.seen(), vec![Seen::Grabbed(6), Seen::Released(6)]);
}

#[test]
fn second_ray_grab_ends_the_first() {
    let mut h = Harness::new(GestureConfig::single_click_drag());
    let handle = Handle::new(7, Pose::IDENTITY);
    let other = HandleEvent::new(RAY + 1, Vec3::ZERO);

    h.at(0);
    h.item.press_start(&handle, &event(0.0));
    h.at(100);
    h.item.press_start(&handle, &other);

    assert_eq!(
        h.seen(),
        vec![Seen::Grabbed(7), Seen::Released(7), Seen::Grabbed(7)]
    );
    assert_eq!(h.item.drag_lerp(), 0.0);

    h.item.press_end(&handle, &event(0.0));
    assert_eq!(h.item.dragged_handle(), Some(&handle));
    h.item.press_end(&handle, &other);
    assert_eq!(h.item.dragged_handle(), None);
}
