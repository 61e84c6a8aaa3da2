//! Request tasks and the set they are tracked in.

use crate::config::DispatcherConfig;
use crate::target::RequestTarget;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// One in-flight request: its target and the handle of the task running it.
#[derive(Debug)]
pub struct RequestTask {
    pub(crate) target: RequestTarget,
    pub(crate) handle: JoinHandle<()>,
}

impl RequestTask {
    pub(crate) fn new(target: RequestTarget, handle: JoinHandle<()>) -> Self {
        Self { target, handle }
    }

    /// What this task requests.
    pub fn target(&self) -> &RequestTarget {
        &self.target
    }
}

/// Every task started by one call to [`Dispatcher::dispatch`], in dispatch
/// order.
///
/// The order carries no meaning beyond bookkeeping: tasks finish in whatever
/// order their requests complete.
///
/// [`Dispatcher::dispatch`]: crate::Dispatcher::dispatch
pub struct TaskSet {
    pub(crate) tasks: Vec<RequestTask>,
    pub(crate) completed: Arc<AtomicUsize>,
    pub(crate) config: Arc<DispatcherConfig>,
}

impl TaskSet {
    pub(crate) fn new(
        tasks: Vec<RequestTask>,
        completed: Arc<AtomicUsize>,
        config: Arc<DispatcherConfig>,
    ) -> Self {
        Self {
            tasks,
            completed,
            config,
        }
    }

    /// Number of tasks in the set.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if the set holds no task.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// How many tasks have terminated so far, successfully or not.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Acquire)
    }

    /// Iterates over the targets in dispatch order.
    pub fn targets(&self) -> impl Iterator<Item = &RequestTarget> {
        self.tasks.iter().map(RequestTask::target)
    }

    /// Waits for every task. Shorthand for [`join_all`](crate::join_all).
    pub async fn join(self) -> crate::Joined {
        crate::join_all(self).await
    }
}

impl fmt::Debug for TaskSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskSet")
            .field("dispatcher", &self.config.name)
            .field("tasks", &self.tasks.len())
            .field("completed", &self.completed())
            .finish()
    }
}

/// Counts its task as completed when dropped.
///
/// Lives inside the task future, so the count also moves when the future is
/// torn down by a panic or by runtime shutdown.
pub(crate) struct CompletionGuard {
    completed: Arc<AtomicUsize>,
}

impl CompletionGuard {
    pub(crate) fn new(completed: &Arc<AtomicUsize>) -> Self {
        Self {
            completed: Arc::clone(completed),
        }
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        self.completed.fetch_add(1, Ordering::Release);
    }
}
