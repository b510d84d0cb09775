//! Hook implementation that records every gesture with the time it fired.

use std::cell::RefCell;
use std::rc::Rc;

use listgrab_core::{Duration, ManualClock, TimeSource};
use listgrab_geometry::Vec3;
use listgrab_input::{Handle, HandleEvent, HandleId, ListItemGestures, RayOriginId};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureKind {
    SingleClick,
    DoubleClick,
    Drag { drag_start: Vec3, position: Vec3 },
    DragStarted,
    DragEnded,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureRecord {
    pub kind: GestureKind,
    pub handle: HandleId,
    pub ray_origin: RayOriginId,
    pub at: Duration,
}

/// Records gestures into a log shared with every clone.
#[derive(Clone, Debug, Default)]
pub struct RecordingGestures {
    clock: ManualClock,
    records: Rc<RefCell<Vec<GestureRecord>>>,
}

impl RecordingGestures {
    pub fn new(clock: ManualClock) -> Self {
        Self {
            clock,
            records: Rc::default(),
        }
    }

    pub fn records(&self) -> Vec<GestureRecord> {
        self.records.borrow().clone()
    }

    pub fn clear(&self) {
        self.records.borrow_mut().clear();
    }

    pub fn count(&self, matches: impl Fn(&GestureKind) -> bool) -> usize {
        self.records
            .borrow()
            .iter()
            .filter(|record| matches(&record.kind))
            .count()
    }

    pub fn single_clicks(&self) -> usize {
        self.count(|kind| matches!(kind, GestureKind::SingleClick))
    }

    pub fn double_clicks(&self) -> usize {
        self.count(|kind| matches!(kind, GestureKind::DoubleClick))
    }

    pub fn drags(&self) -> usize {
        self.count(|kind| matches!(kind, GestureKind::Drag { .. }))
    }

    fn push(&self, kind: GestureKind, handle: &Handle, event: &HandleEvent) {
        self.records.borrow_mut().push(GestureRecord {
            kind,
            handle: handle.id(),
            ray_origin: event.ray_origin,
            at: self.clock.now(),
        });
    }
}

impl ListItemGestures for RecordingGestures {
    fn on_single_click(&mut self, handle: &Handle, event: &HandleEvent) {
        self.push(GestureKind::SingleClick, handle, event);
    }

    fn on_double_click(&mut self, handle: &Handle, event: &HandleEvent) {
        self.push(GestureKind::DoubleClick, handle, event);
    }

    fn on_single_click_drag(&mut self, handle: &Handle, event: &HandleEvent, drag_start: Vec3) {
        let kind = GestureKind::Drag {
            drag_start,
            position: event.position,
        };
        self.push(kind, handle, event);
    }

    fn on_drag_started(&mut self, handle: &Handle, event: &HandleEvent) {
        self.push(GestureKind::DragStarted, handle, event);
    }

    fn on_drag_ended(&mut self, handle: &Handle, event: &HandleEvent) {
        self.push(GestureKind::DragEnded, handle, event);
    }
}
