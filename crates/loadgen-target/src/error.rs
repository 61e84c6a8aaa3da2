//! Error types for the target server.

/// Errors raised while configuring or running the target server.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    /// The worker count is outside the supported range.
    #[error("bad value provided for the worker count: {workers} is not between {min} and {max}")]
    InvalidWorkers {
        /// The rejected value.
        workers: usize,
        /// Smallest accepted value.
        min: usize,
        /// Largest accepted value.
        max: usize,
    },
    /// Binding or serving failed.
    #[error("server I/O error")]
    Io(#[from] std::io::Error),
}

/// Result type for target server operations.
pub type Result<T> = std::result::Result<T, TargetError>;
