use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::{Rc, Weak};
use web_time::Duration;

pub type TaskId = u64;

/// Result of polling a frame task once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskPoll {
    /// Poll again on the next frame.
    Pending,
    /// The task is finished and is dropped.
    Ready,
}

type FrameTask = Box<dyn FnMut(Duration) -> TaskPoll>;

#[derive(Default)]
struct SchedulerInner {
    next_id: TaskId,
    tasks: Vec<(TaskId, FrameTask)>,
    live: HashSet<TaskId>,
    ticking: bool,
}

/// Cooperative per-frame task runner.
///
/// Tasks are closures polled once per [`tick`](Self::tick) with the frame
/// time until they return [`TaskPoll::Ready`] or are cancelled through their
/// [`TaskHandle`]. Nothing here blocks; the host owns the frame loop.
#[derive(Clone, Default)]
pub struct FrameScheduler {
    inner: Rc<RefCell<SchedulerInner>>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a task. It is first polled on the next tick, including when
    /// spawned from inside another task.
    pub fn spawn(&self, task: impl FnMut(Duration) -> TaskPoll + 'static) -> TaskHandle {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.tasks.push((id, Box::new(task)));
        inner.live.insert(id);
        log::trace!("FrameScheduler: spawned task {id}");
        TaskHandle {
            scheduler: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Polls every live task once. Returns the number of tasks still pending.
    pub fn tick(&self, frame_time: Duration) -> usize {
        let mut running = {
            let mut inner = self.inner.borrow_mut();
            if inner.ticking {
                log::warn!("FrameScheduler: nested tick at {frame_time:?} ignored");
                return inner.live.len();
            }
            inner.ticking = true;
            std::mem::take(&mut inner.tasks)
        };

        let mut pending = Vec::with_capacity(running.len());
        for (id, mut task) in running.drain(..) {
            // Cancelled by an earlier task in this frame.
            if !self.is_live(id) {
                continue;
            }
            match task(frame_time) {
                TaskPoll::Pending => pending.push((id, task)),
                TaskPoll::Ready => {
                    self.inner.borrow_mut().live.remove(&id);
                    log::trace!("FrameScheduler: task {id} completed");
                }
            }
        }

        let (mut still_live, cancelled): (Vec<_>, Vec<_>) = {
            let inner = self.inner.borrow();
            pending
                .into_iter()
                .partition(|(id, _)| inner.live.contains(id))
        };
        // Task captures may own handles of their own; drop them unborrowed.
        drop(cancelled);

        let mut inner = self.inner.borrow_mut();
        still_live.append(&mut inner.tasks);
        inner.tasks = still_live;
        inner.ticking = false;
        inner.tasks.len()
    }

    pub fn pending_tasks(&self) -> usize {
        self.inner.borrow().live.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending_tasks() == 0
    }

    fn is_live(&self, id: TaskId) -> bool {
        self.inner.borrow().live.contains(&id)
    }
}

fn cancel_task(scheduler: &Rc<RefCell<SchedulerInner>>, id: TaskId) {
    let removed = {
        let mut inner = scheduler.borrow_mut();
        if !inner.live.remove(&id) {
            return;
        }
        log::trace!("FrameScheduler: cancelled task {id}");
        // While ticking the task may be outside `tasks`; the tick loop drops it.
        let index = inner.tasks.iter().position(|(task_id, _)| *task_id == id);
        index.map(|index| inner.tasks.remove(index))
    };
    drop(removed);
}

/// Owning handle to a spawned task. Dropping it cancels the task.
pub struct TaskHandle {
    scheduler: Weak<RefCell<SchedulerInner>>,
    id: TaskId,
}

impl TaskHandle {
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Whether the task is still registered and has not completed.
    pub fn is_active(&self) -> bool {
        self.scheduler
            .upgrade()
            .is_some_and(|scheduler| scheduler.borrow().live.contains(&self.id))
    }

    pub fn cancel(self) {
        // Drop does the work.
    }
}

impl std::fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskHandle")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        if let Some(scheduler) = self.scheduler.upgrade() {
            cancel_task(&scheduler, self.id);
        }
    }
}

#[cfg(test)]
#[path = "tests/frame_clock_tests.rs"]
mod tests;
