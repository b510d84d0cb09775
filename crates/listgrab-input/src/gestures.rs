use listgrab_geometry::Vec3;

use crate::types::{Handle, HandleEvent};

/// Reactions to classified gestures. Every hook defaults to doing nothing, so
/// implementors only override what they care about; classification itself is
/// not affected by what the hooks do.
pub trait ListItemGestures {
    /// A press resolved as a single click once the double-click window closed.
    /// `event` is the press that started the click run.
    fn on_single_click(&mut self, handle: &Handle, event: &HandleEvent) {
        let _ = (handle, event);
    }

    /// A second press landed inside the double-click window.
    fn on_double_click(&mut self, handle: &Handle, event: &HandleEvent) {
        let _ = (handle, event);
    }

    /// Every pointer move in [`DragMode::Disambiguate`](crate::DragMode),
    /// whether or not the deadzone has been exceeded. `drag_start` is where
    /// this ray origin was when it pressed.
    fn on_single_click_drag(&mut self, handle: &Handle, event: &HandleEvent, drag_start: Vec3) {
        let _ = (handle, event, drag_start);
    }

    /// A press grabbed the item in [`DragMode::SingleClickDrag`](crate::DragMode).
    fn on_drag_started(&mut self, handle: &Handle, event: &HandleEvent) {
        let _ = (handle, event);
    }

    /// The grab started by [`on_drag_started`](Self::on_drag_started) was released.
    fn on_drag_ended(&mut self, handle: &Handle, event: &HandleEvent) {
        let _ = (handle, event);
    }
}

impl ListItemGestures for () {}
