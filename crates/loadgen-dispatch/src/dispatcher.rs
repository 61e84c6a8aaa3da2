//! The dispatcher: starts one task per request and returns immediately.

use crate::config::DispatcherConfig;
use crate::error::describe_error;
use crate::events::DispatchEvent;
use crate::executor::{CurrentRuntime, Executor};
use crate::report::FailedRequest;
use crate::target::{targets, RequestTarget};
use crate::task::{CompletionGuard, RequestTask, TaskSet};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use std::time::Instant;
use tower::{BoxError, Service, ServiceExt};

/// Upper bound on the task-set capacity reserved before spawning.
///
/// `n` comes straight from the command line, so the set grows as tasks are
/// spawned instead of being sized for `n` up front.
const MAX_RESERVED_TASKS: usize = 1024;

/// Starts parity-split request tasks against a base URL.
///
/// Every request is spawned as its own task on the executor. There is no
/// pool and no cap: dispatching `n` requests puts `n` tasks in flight.
#[derive(Clone)]
pub struct Dispatcher<S, E = CurrentRuntime> {
    service: S,
    executor: E,
    config: Arc<DispatcherConfig>,
}

impl<S> Dispatcher<S, CurrentRuntime> {
    /// Creates a dispatcher that spawns onto the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called from outside a tokio runtime.
    pub fn new(service: S, config: DispatcherConfig) -> Self {
        Self::with_executor(service, CurrentRuntime::new(), config)
    }
}

impl<S, E> Dispatcher<S, E> {
    /// Creates a dispatcher that spawns onto `executor`.
    pub fn with_executor(service: S, executor: E, config: DispatcherConfig) -> Self {
        Self {
            service,
            executor,
            config: Arc::new(config),
        }
    }

    /// The dispatcher's configuration.
    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }
}

impl<S, E> Dispatcher<S, E>
where
    S: Service<RequestTarget> + Clone + Send + 'static,
    S::Future: Send,
    S::Response: Send + 'static,
    S::Error: Into<BoxError>,
    E: Executor,
{
    /// Starts `n` request tasks and returns without waiting for any of them.
    ///
    /// Even indices request `base_url + "/sleep"`, odd indices request
    /// `base_url` itself. `n == 0` returns an empty set. Unreachable or
    /// malformed URLs never make this call fail; each affected task reports
    /// its own failure.
    pub fn dispatch(&self, base_url: &str, n: usize) -> TaskSet {
        let completed = Arc::new(AtomicUsize::new(0));
        let mut tasks = Vec::with_capacity(n.min(MAX_RESERVED_TASKS));

        for target in targets(base_url, n) {
            let handle = self.executor.spawn(run_task(
                self.service.clone(),
                target.clone(),
                Arc::clone(&self.config),
                CompletionGuard::new(&completed),
            ));
            tasks.push(RequestTask::new(target, handle));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            dispatcher = %self.config.name,
            base_url,
            tasks = n,
            "dispatched request tasks"
        );

        TaskSet::new(tasks, completed, Arc::clone(&self.config))
    }
}

/// Body of a single request task.
///
/// Every failure, including a panic inside the service, ends here as a report;
/// nothing propagates out of the task.
async fn run_task<S>(
    service: S,
    target: RequestTarget,
    config: Arc<DispatcherConfig>,
    _guard: CompletionGuard,
) where
    S: Service<RequestTarget> + Send,
    S::Future: Send,
    S::Error: Into<BoxError>,
{
    let index = target.index;
    let url = target.url.clone();
    let start = Instant::now();

    config.event_listeners.emit(&DispatchEvent::TaskStarted {
        source_name: config.name.clone(),
        timestamp: start,
        index,
        url: url.clone(),
    });

    let outcome = AssertUnwindSafe(service.oneshot(target))
        .catch_unwind()
        .await;

    let error = match outcome {
        Ok(Ok(_response)) => None,
        Ok(Err(err)) => {
            let err: BoxError = err.into();
            Some(describe_error(&*err))
        }
        Err(panic) => Some(format!("request task panicked: {}", panic_message(&*panic))),
    };

    match error {
        None => {
            #[cfg(feature = "tracing")]
            tracing::trace!(dispatcher = %config.name, index, %url, "request completed");

            config.event_listeners.emit(&DispatchEvent::TaskSucceeded {
                source_name: config.name.clone(),
                timestamp: Instant::now(),
                index,
                url,
                duration: start.elapsed(),
            });
        }
        Some(error) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(dispatcher = %config.name, index, %url, %error, "request failed");

            let failure = FailedRequest { url, error };
            config.reporter.report(&failure);

            config.event_listeners.emit(&DispatchEvent::TaskFailed {
                source_name: config.name.clone(),
                timestamp: Instant::now(),
                index,
                url: failure.url,
                error: failure.error,
                duration: start.elapsed(),
            });
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}
