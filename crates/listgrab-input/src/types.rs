use listgrab_geometry::{Pose, Vec3};
use std::cell::Cell;
use std::rc::Rc;

/// Identity of a pointing device (a controller ray origin).
pub type RayOriginId = u64;

/// Identity of a grabbable handle on a list item.
pub type HandleId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandlePhase {
    DragStarted,
    Dragging,
    DragEnded,
}

/// A grabbable visual on a list item.
///
/// Clones share the same pose, so the classifier can move the visual it was
/// handed while the host keeps rendering from its own copy.
#[derive(Clone, Debug)]
pub struct Handle {
    id: HandleId,
    pose: Rc<Cell<Pose>>,
}

impl Handle {
    pub fn new(id: HandleId, pose: Pose) -> Self {
        Self {
            id,
            pose: Rc::new(Cell::new(pose)),
        }
    }

    pub fn id(&self) -> HandleId {
        self.id
    }

    pub fn pose(&self) -> Pose {
        self.pose.get()
    }

    pub fn set_pose(&self, pose: Pose) {
        self.pose.set(pose);
    }
}

impl PartialEq for Handle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Handle {}

/// Pointer sample delivered with every handle event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandleEvent {
    pub ray_origin: RayOriginId,
    /// World position of the ray origin.
    pub position: Vec3,
}

impl HandleEvent {
    pub const fn new(ray_origin: RayOriginId, position: Vec3) -> Self {
        Self {
            ray_origin,
            position,
        }
    }
}
