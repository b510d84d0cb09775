//! Gesture classification for draggable list items.
//!
//! A [`DraggableListItem`] receives press-start, press-move and press-end
//! events from ray-origin pointers and turns them into single clicks, double
//! clicks and drags, reported through the [`ListItemGestures`] hooks.

mod config;
mod dispatcher;
mod draggable_item;
mod error;
pub mod gesture_constants;
mod gestures;
mod pending_click;
mod types;

pub use config::{ClickTiming, DragMode, GestureConfig};
pub use dispatcher::HandleEventQueue;
pub use draggable_item::{DraggableListItem, PreviewOriginProvider};
pub use error::GestureError;
pub use gestures::ListItemGestures;
pub use types::{Handle, HandleEvent, HandleId, HandlePhase, RayOriginId};

pub mod prelude {
    pub use super::config::{ClickTiming, DragMode, GestureConfig};
    pub use super::draggable_item::DraggableListItem;
    pub use super::gestures::ListItemGestures;
    pub use super::types::{Handle, HandleEvent, HandleId, HandlePhase, RayOriginId};
}
