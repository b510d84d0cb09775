//! Host-side handle event queue.
//!
//! Input callbacks often arrive while the host is in the middle of something
//! else. They can be queued here and drained into the item at a safe point,
//! in delivery order.

use crate::draggable_item::DraggableListItem;
use crate::error::GestureError;
use crate::gestures::ListItemGestures;
use crate::types::{Handle, HandleEvent, HandlePhase};

#[derive(Default)]
pub struct HandleEventQueue {
    queue: Vec<(HandlePhase, Handle, HandleEvent)>,
}

impl HandleEventQueue {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    pub fn push(&mut self, phase: HandlePhase, handle: Handle, event: HandleEvent) {
        self.queue.push((phase, handle, event));
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(HandlePhase, Handle, HandleEvent),
    {
        for (phase, handle, event) in self.queue.drain(..) {
            handler(phase, handle, event);
        }
    }

    /// Delivers every queued event to `item`. Rejected events are returned;
    /// the rest of the queue is still delivered.
    pub fn drain_into<G>(&mut self, item: &mut DraggableListItem<G>) -> Vec<GestureError>
    where
        G: ListItemGestures + 'static,
    {
        let mut errors = Vec::new();
        self.drain(|phase, handle, event| {
            if let Err(error) = item.dispatch(phase, &handle, &event) {
                errors.push(error);
            }
        });
        errors
    }
}
