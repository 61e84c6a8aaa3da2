//! Concurrent dispatch of parity-split HTTP GET requests, and a join barrier
//! over them.
//!
//! A [`Dispatcher`] starts one task per request and returns at once with a
//! [`TaskSet`]. [`join_all`] then waits for every task to terminate. Each
//! task handles its own failure: it reports a `Failed to open <url>: <why>`
//! line through the configured [`FailureReporter`] and ends normally, so one
//! failed request never disturbs the others or the join.
//!
//! Requests alternate by index parity: even indices hit `base_url + "/sleep"`,
//! odd indices hit `base_url` itself.
//!
//! # Example
//!
//! ```rust,no_run
//! use loadgen_dispatch::{join_all, Dispatcher, DispatcherConfig, HttpGet};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dispatcher = Dispatcher::new(HttpGet::new()?, DispatcherConfig::default());
//!
//! // 100 requests are in flight as soon as this returns
//! let tasks = dispatcher.dispatch("http://127.0.0.1:7878", 100);
//!
//! // Failures have already been printed by the tasks themselves
//! let joined = join_all(tasks).await;
//! assert_eq!(joined.tasks, 100);
//! # Ok(())
//! # }
//! ```
//!
//! # Custom request services
//!
//! Any cloneable `tower::Service<RequestTarget>` can stand in for [`HttpGet`],
//! which is how the tests drive the dispatcher without a network:
//!
//! ```rust
//! use loadgen_dispatch::{Dispatcher, DispatcherConfig, MemoryReporter, RequestTarget};
//! use tower::BoxError;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let reporter = MemoryReporter::new();
//! let service = tower::service_fn(|target: RequestTarget| async move {
//!     if target.index == 3 {
//!         return Err::<(), BoxError>("connection reset".into());
//!     }
//!     Ok(())
//! });
//!
//! let config = DispatcherConfig::builder().reporter(reporter.clone()).build();
//! let joined = Dispatcher::new(service, config).dispatch("http://h", 4).join().await;
//!
//! assert_eq!(joined.tasks, 4);
//! assert_eq!(reporter.lines(), vec!["Failed to open http://h: connection reset"]);
//! # }
//! ```

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod events;
pub mod executor;
pub mod http;
pub mod join;
pub mod report;
pub mod target;
pub mod task;

pub use config::{DispatcherConfig, DispatcherConfigBuilder};
pub use dispatcher::Dispatcher;
pub use error::{describe_error, RequestError, Result};
pub use events::DispatchEvent;
pub use executor::{CurrentRuntime, Executor};
pub use http::HttpGet;
pub use join::{join_all, Joined};
pub use loadgen_core::LoadEvent;
pub use report::{FailedRequest, FailureReporter, FnReporter, MemoryReporter, StderrReporter};
pub use target::{targets, Endpoint, RequestTarget, SLEEP_PATH};
pub use task::{RequestTask, TaskSet};
