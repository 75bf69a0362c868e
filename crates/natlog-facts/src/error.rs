//! Error types for fact loading

use thiserror::Error;

/// Errors that abort a fact load.
#[derive(Debug, Error)]
pub enum FactLoadError {
    /// Reading from the fact source failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The fact source reported a failure of its own.
    #[error("Fact source error: {0}")]
    Source(String),
}
