//! Executor trait for spawning request tasks.

use std::future::Future;
use tokio::task::JoinHandle;

/// Something that can start a future as an independently scheduled task.
///
/// The dispatcher spawns every request through this trait. Spawning must not
/// wait for the future to make progress: `spawn` returns as soon as the task
/// is handed to the scheduler.
///
/// # Example
///
/// ```rust,no_run
/// use loadgen_dispatch::Executor;
/// use tokio::runtime::Handle;
///
/// // A tokio runtime handle is an executor
/// fn assert_executor<E: Executor>(_: &E) {}
/// assert_executor(&Handle::current());
/// ```
pub trait Executor: Clone + Send + Sync + 'static {
    /// Starts `future` and returns a handle to await its output.
    fn spawn<F>(&self, future: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static;
}

impl Executor for tokio::runtime::Handle {
    fn spawn<F>(&self, future: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        tokio::runtime::Handle::spawn(self, future)
    }
}

/// Executor bound to the runtime that was current when it was created.
///
/// On a multi-threaded runtime every spawned request may run on any worker
/// thread, in parallel with the others.
#[derive(Clone, Debug)]
pub struct CurrentRuntime {
    handle: tokio::runtime::Handle,
}

impl CurrentRuntime {
    /// Captures the current runtime handle.
    ///
    /// # Panics
    ///
    /// Panics if called from outside a tokio runtime.
    pub fn new() -> Self {
        Self {
            handle: tokio::runtime::Handle::current(),
        }
    }
}

impl Default for CurrentRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for CurrentRuntime {
    fn spawn<F>(&self, future: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        self.handle.spawn(future)
    }
}
