//! Events emitted by a dispatcher over the life of its tasks.

use loadgen_core::LoadEvent;
use std::time::{Duration, Instant};

/// Lifecycle events for dispatched request tasks.
#[derive(Debug, Clone)]
pub enum DispatchEvent {
    /// A task was spawned and is about to issue its request.
    TaskStarted {
        source_name: String,
        timestamp: Instant,
        index: usize,
        url: String,
    },
    /// A task's request completed without a transport error.
    TaskSucceeded {
        source_name: String,
        timestamp: Instant,
        index: usize,
        url: String,
        duration: Duration,
    },
    /// A task's request failed; the failure has been reported.
    TaskFailed {
        source_name: String,
        timestamp: Instant,
        index: usize,
        url: String,
        error: String,
        duration: Duration,
    },
    /// Every task of a set has terminated and been joined.
    AllJoined {
        source_name: String,
        timestamp: Instant,
        tasks: usize,
        aborted: usize,
    },
}

impl LoadEvent for DispatchEvent {
    fn event_type(&self) -> &'static str {
        match self {
            DispatchEvent::TaskStarted { .. } => "task_started",
            DispatchEvent::TaskSucceeded { .. } => "task_succeeded",
            DispatchEvent::TaskFailed { .. } => "task_failed",
            DispatchEvent::AllJoined { .. } => "all_joined",
        }
    }

    fn timestamp(&self) -> Instant {
        match self {
            DispatchEvent::TaskStarted { timestamp, .. }
            | DispatchEvent::TaskSucceeded { timestamp, .. }
            | DispatchEvent::TaskFailed { timestamp, .. }
            | DispatchEvent::AllJoined { timestamp, .. } => *timestamp,
        }
    }

    fn source_name(&self) -> &str {
        match self {
            DispatchEvent::TaskStarted { source_name, .. }
            | DispatchEvent::TaskSucceeded { source_name, .. }
            | DispatchEvent::TaskFailed { source_name, .. }
            | DispatchEvent::AllJoined { source_name, .. } => source_name,
        }
    }
}
