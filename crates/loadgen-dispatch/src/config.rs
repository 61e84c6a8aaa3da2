//! Configuration for a dispatcher.

use crate::events::DispatchEvent;
use crate::report::{FailedRequest, FailureReporter, StderrReporter};
use loadgen_core::events::{EventListeners, FnListener};
use std::sync::Arc;
use std::time::Duration;

/// Configuration shared by a dispatcher and every task it starts.
#[derive(Clone)]
pub struct DispatcherConfig {
    /// Name used as the source of emitted events and in log output.
    pub(crate) name: String,
    /// Where failing tasks send their report.
    pub(crate) reporter: Arc<dyn FailureReporter>,
    /// Event listeners.
    pub(crate) event_listeners: EventListeners<DispatchEvent>,
}

impl DispatcherConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> DispatcherConfigBuilder {
        DispatcherConfigBuilder::new()
    }

    /// The configured name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        DispatcherConfigBuilder::new().build()
    }
}

/// Builder for [`DispatcherConfig`].
pub struct DispatcherConfigBuilder {
    name: String,
    reporter: Arc<dyn FailureReporter>,
    event_listeners: EventListeners<DispatchEvent>,
}

impl DispatcherConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self {
            name: "loadgen".to_string(),
            reporter: Arc::new(StderrReporter),
            event_listeners: EventListeners::new(),
        }
    }

    /// Sets the name of this dispatcher.
    ///
    /// Default: "loadgen"
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the sink that receives one report per failed request.
    ///
    /// Default: [`StderrReporter`], which prints
    /// `Failed to open <url>: <description>` to standard error.
    ///
    /// # Example
    /// ```rust
    /// use loadgen_dispatch::{DispatcherConfig, MemoryReporter};
    ///
    /// let reporter = MemoryReporter::new();
    /// let config = DispatcherConfig::builder()
    ///     .reporter(reporter.clone())
    ///     .build();
    /// assert!(reporter.failures().is_empty());
    /// ```
    pub fn reporter<R>(mut self, reporter: R) -> Self
    where
        R: FailureReporter + 'static,
    {
        self.reporter = Arc::new(reporter);
        self
    }

    /// Registers a callback invoked when a task starts its request.
    ///
    /// # Callback Signature
    /// `Fn(usize, &str)` - the request index and the URL it targets.
    pub fn on_task_started<F>(mut self, f: F) -> Self
    where
        F: Fn(usize, &str) + Send + Sync + 'static,
    {
        self.event_listeners.add(FnListener::new(move |event| {
            if let DispatchEvent::TaskStarted { index, url, .. } = event {
                f(*index, url);
            }
        }));
        self
    }

    /// Registers a callback invoked when a task's request completes.
    ///
    /// Any response counts, whatever its status code.
    ///
    /// # Callback Signature
    /// `Fn(usize, Duration)` - the request index and how long the call took.
    pub fn on_task_succeeded<F>(mut self, f: F) -> Self
    where
        F: Fn(usize, Duration) + Send + Sync + 'static,
    {
        self.event_listeners.add(FnListener::new(move |event| {
            if let DispatchEvent::TaskSucceeded {
                index, duration, ..
            } = event
            {
                f(*index, *duration);
            }
        }));
        self
    }

    /// Registers a callback invoked after a failed task has reported.
    ///
    /// # Callback Signature
    /// `Fn(&FailedRequest)` - the same report the reporter received.
    ///
    /// # Example
    /// ```rust
    /// use loadgen_dispatch::DispatcherConfig;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use std::sync::Arc;
    ///
    /// let failures = Arc::new(AtomicUsize::new(0));
    /// let counter = Arc::clone(&failures);
    ///
    /// let config = DispatcherConfig::builder()
    ///     .on_task_failed(move |failure| {
    ///         counter.fetch_add(1, Ordering::SeqCst);
    ///         let _ = &failure.url;
    ///     })
    ///     .build();
    /// ```
    pub fn on_task_failed<F>(mut self, f: F) -> Self
    where
        F: Fn(&FailedRequest) + Send + Sync + 'static,
    {
        self.event_listeners.add(FnListener::new(move |event| {
            if let DispatchEvent::TaskFailed { url, error, .. } = event {
                f(&FailedRequest {
                    url: url.clone(),
                    error: error.clone(),
                });
            }
        }));
        self
    }

    /// Registers a callback invoked once a whole task set has been joined.
    ///
    /// # Callback Signature
    /// `Fn(usize)` - the number of tasks joined.
    pub fn on_all_joined<F>(mut self, f: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.event_listeners.add(FnListener::new(move |event| {
            if let DispatchEvent::AllJoined { tasks, .. } = event {
                f(*tasks);
            }
        }));
        self
    }

    /// Registers a listener that receives every event, whatever its kind.
    ///
    /// # Example
    /// ```rust
    /// use loadgen_dispatch::{DispatcherConfig, LoadEvent};
    ///
    /// let config = DispatcherConfig::builder()
    ///     .on_event(|event| println!("{} from {}", event.event_type(), event.source_name()))
    ///     .build();
    /// ```
    pub fn on_event<F>(mut self, listener: F) -> Self
    where
        F: Fn(&DispatchEvent) + Send + Sync + 'static,
    {
        self.event_listeners.add(FnListener::new(listener));
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> DispatcherConfig {
        DispatcherConfig {
            name: self.name,
            reporter: self.reporter,
            event_listeners: self.event_listeners,
        }
    }
}

impl Default for DispatcherConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
