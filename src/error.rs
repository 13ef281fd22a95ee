//! Error types.

use thiserror::Error;

/// Error returned by a [`ResultSink`](crate::sink::ResultSink).
///
/// Sink implementations box whatever error they produce; the engine only
/// logs the failure and never acts on its contents.
pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while loading or saving a score store snapshot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The snapshot file could not be read or written.
    #[error("score store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The snapshot contents were not a valid store.
    #[error("score store snapshot is invalid: {0}")]
    Snapshot(#[from] serde_json::Error),
}
