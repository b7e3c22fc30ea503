//! Deferred task queue.
//!
//! Work that must run only after the host has applied the current round of
//! state changes (for example, choosing which view to show once the panel
//! has been opened) is posted here and executed when the host calls
//! [`SharedTaskQueue::process_all`].

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::logging::targets;

/// Identifies a posted task so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// The raw id; ids grow monotonically per process.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

fn next_task_id() -> TaskId {
    TaskId(NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed))
}

type BoxedTask = Box<dyn FnOnce() + Send + 'static>;

struct TaskData {
    id: TaskId,
    task: BoxedTask,
}

/// FIFO queue of deferred one-shot tasks.
#[derive(Default)]
pub struct TaskQueue {
    tasks: VecDeque<TaskData>,
}

impl TaskQueue {
    /// Create an empty task queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` behind everything already pending.
    pub fn post<F>(&mut self, task: F) -> TaskId
    where
        F: FnOnce() + Send + 'static,
    {
        let id = next_task_id();
        self.tasks.push_back(TaskData {
            id,
            task: Box::new(task),
        });
        id
    }

    /// Drop a task that has not run yet. `false` if it already ran or was
    /// never queued here.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        if let Some(pos) = self.tasks.iter().position(|t| t.id == id) {
            self.tasks.remove(pos);
            true
        } else {
            false
        }
    }

    /// Tasks waiting to run.
    pub fn pending_count(&self) -> usize {
        self.tasks.len()
    }

    /// Remove every pending task, preserving order.
    fn drain(&mut self) -> Vec<TaskData> {
        self.tasks.drain(..).collect()
    }
}

impl std::fmt::Debug for TaskQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskQueue")
            .field("pending", &self.tasks.len())
            .finish()
    }
}

/// A lock-protected [`TaskQueue`] that can be shared through an `Arc`.
///
/// Tasks run outside the lock, so a task may post further tasks; those run
/// on the next call to [`process_all`](Self::process_all).
#[derive(Debug, Default)]
pub struct SharedTaskQueue {
    inner: Mutex<TaskQueue>,
}

impl SharedTaskQueue {
    /// Create an empty shared queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// See [`TaskQueue::post`].
    pub fn post<F>(&self, task: F) -> TaskId
    where
        F: FnOnce() + Send + 'static,
    {
        let id = self.inner.lock().post(task);
        tracing::trace!(target: targets::TASK, task = id.as_u64(), "task posted");
        id
    }

    /// See [`TaskQueue::cancel`].
    pub fn cancel(&self, id: TaskId) -> bool {
        self.inner.lock().cancel(id)
    }

    /// Whether any task is waiting for [`process_all`](Self::process_all).
    pub fn has_pending(&self) -> bool {
        self.inner.lock().pending_count() > 0
    }

    /// Run every task that was pending when this call started and return
    /// how many ran.
    pub fn process_all(&self) -> usize {
        let tasks = self.inner.lock().drain();
        let count = tasks.len();
        for task_data in tasks {
            tracing::trace!(target: targets::TASK, task = task_data.id.as_u64(), "running task");
            (task_data.task)();
        }
        count
    }
}
