use std::rc::Rc;

use listgrab_core::{Duration, FrameScheduler, ManualClock, TimeSource};
use listgrab_geometry::{Pose, Quat, Vec3};
use listgrab_input::{
    DraggableListItem, GestureConfig, Handle, HandleEvent, HandleEventQueue, HandlePhase,
    ListItemGestures,
};

const FRAME: Duration = Duration::from_nanos(16_666_667);
const LEFT_HAND: u64 = 1;

/// Logs every gesture with the replay time.
struct LoggingGestures {
    label: &'static str,
    clock: ManualClock,
    fired: usize,
}

impl LoggingGestures {
    fn new(label: &'static str, clock: ManualClock) -> Self {
        Self {
            label,
            clock,
            fired: 0,
        }
    }

    fn report(&mut self, what: &str, handle: &Handle) {
        self.fired += 1;
        log::info!(
            "[{:>7.3}s] {}: {what} on handle {}",
            self.clock.now().as_secs_f32(),
            self.label,
            handle.id()
        );
    }
}

impl ListItemGestures for LoggingGestures {
    fn on_single_click(&mut self, handle: &Handle, _event: &HandleEvent) {
        self.report("single click", handle);
    }

    fn on_double_click(&mut self, handle: &Handle, _event: &HandleEvent) {
        self.report("double click", handle);
    }

    fn on_single_click_drag(&mut self, handle: &Handle, event: &HandleEvent, drag_start: Vec3) {
        let travelled = event.position.distance(drag_start);
        log::debug!("{}: drag on handle {} ({travelled:.3})", self.label, handle.id());
    }

    fn on_drag_started(&mut self, handle: &Handle, _event: &HandleEvent) {
        self.report("grabbed", handle);
    }

    fn on_drag_ended(&mut self, handle: &Handle, _event: &HandleEvent) {
        self.report(&format!("released at {:?}", handle.pose().position), handle);
    }
}

/// One scripted controller event.
struct Step {
    at: Duration,
    phase: HandlePhase,
    position: Vec3,
}

fn step(millis: u64, phase: HandlePhase, x: f32) -> Step {
    Step {
        at: Duration::from_millis(millis),
        phase,
        position: Vec3::new(x, 1.2, 0.4),
    }
}

/// Frame loop stand-in: advances the clock one frame at a time, feeding the
/// scripted events through a queue as their time comes up.
fn replay(
    clock: &ManualClock,
    scheduler: &FrameScheduler,
    item: &mut DraggableListItem<LoggingGestures>,
    handle: &Handle,
    script: &[Step],
    tail: Duration,
) {
    let mut queue = HandleEventQueue::new();
    let end = script.last().map_or(Duration::ZERO, |step| step.at) + tail;
    let mut next = 0;

    while clock.now() < end {
        let frame_time = (clock.now() + FRAME).min(end);
        while next < script.len() && script[next].at <= frame_time {
            let step = &script[next];
            clock.set(step.at);
            queue.push(
                step.phase,
                handle.clone(),
                HandleEvent::new(LEFT_HAND, step.position),
            );
            for error in queue.drain_into(item) {
                log::warn!("replay: {error}");
            }
            next += 1;
        }
        clock.set(frame_time);
        scheduler.tick(frame_time);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== listgrab gesture replay ===");
    println!("  - single click, double click and a cancelled click on a list row");
    println!("  - a grab that magnetizes the row into the hand");
    println!();

    let clock = ManualClock::new();
    let scheduler = FrameScheduler::new();
    let time: Rc<dyn TimeSource> = Rc::new(clock.clone());

    let mut row = DraggableListItem::new(
        GestureConfig::disambiguate(),
        scheduler.clone(),
        Rc::clone(&time),
        LoggingGestures::new("row", clock.clone()),
    );
    let row_handle = Handle::new(1, Pose::IDENTITY);
    let clicks = [
        // Single click.
        step(0, HandlePhase::DragStarted, 0.0),
        step(60, HandlePhase::DragEnded, 0.0),
        // Double click.
        step(800, HandlePhase::DragStarted, 0.0),
        step(850, HandlePhase::DragEnded, 0.0),
        step(950, HandlePhase::DragStarted, 0.0),
        step(1_000, HandlePhase::DragEnded, 0.0),
        // Press then pull away: no click.
        step(1_800, HandlePhase::DragStarted, 0.0),
        step(1_850, HandlePhase::Dragging, 0.01),
        step(1_900, HandlePhase::Dragging, 0.08),
        step(2_000, HandlePhase::DragEnded, 0.08),
    ];
    replay(
        &clock,
        &scheduler,
        &mut row,
        &row_handle,
        &clicks,
        Duration::from_millis(500),
    );

    let mut grabbable = DraggableListItem::new(
        GestureConfig::single_click_drag(),
        scheduler.clone(),
        time,
        LoggingGestures::new("grab", clock.clone()),
    );
    let hand_pose = Pose::new(
        Vec3::new(0.0, 1.0, 0.3),
        Quat::from_axis_angle(Vec3::new(0.0, 1.0, 0.0), std::f32::consts::FRAC_PI_4),
    );
    grabbable.set_preview_origin_provider(move |ray| (ray == LEFT_HAND).then_some(hand_pose));
    let grab_handle = Handle::new(2, Pose::from_position(Vec3::new(0.5, 1.4, 0.8)));
    let start = clock.now().as_millis() as u64 + 100;
    let mut grab = vec![step(start, HandlePhase::DragStarted, 0.0)];
    for frame in 1..=40 {
        grab.push(step(start + frame * 16, HandlePhase::Dragging, 0.0));
    }
    grab.push(step(start + 700, HandlePhase::DragEnded, 0.0));
    replay(
        &clock,
        &scheduler,
        &mut grabbable,
        &grab_handle,
        &grab,
        Duration::from_millis(100),
    );

    println!();
    println!(
        "row reported {} gestures, grab reported {}",
        row.gestures().fired,
        grabbable.gestures().fired
    );
}
