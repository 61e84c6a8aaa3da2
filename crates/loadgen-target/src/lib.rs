//! Target server for the load generator.
//!
//! Serves a fast endpoint (`/`) and a slow one (`/sleep`) behind a small,
//! fixed number of workers, so a burst of concurrent requests visibly queues.
//!
//! ```rust,no_run
//! use loadgen_target::{serve, TargetConfig};
//! use tokio::net::TcpListener;
//!
//! # async fn example() -> loadgen_target::Result<()> {
//! let config = TargetConfig::builder().workers(5).build()?;
//! let listener = TcpListener::bind("127.0.0.1:7878").await?;
//! serve(listener, config, std::future::pending()).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod routes;

pub use config::{TargetConfig, TargetConfigBuilder, MAX_WORKERS, MIN_WORKERS};
pub use error::{Result, TargetError};
pub use routes::router;

use std::future::Future;
use tokio::net::TcpListener;

/// Serves the router on `listener` until `shutdown` resolves.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn serve<F>(listener: TcpListener, config: TargetConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::debug!(
        workers = config.workers(),
        sleep_ms = config.sleep().as_millis() as u64,
        "starting target server"
    );
    axum::serve(listener, router(&config).into_make_service())
        .with_graceful_shutdown(shutdown)
        .await?;
    tracing::info!("target server stopped");
    Ok(())
}
