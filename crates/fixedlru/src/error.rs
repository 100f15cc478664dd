//! Error types for fixedlru

use thiserror::Error;

/// Result type alias for fixedlru operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to callers
///
/// Only construction and configuration can fail. Every cache operation on a
/// constructed cache is total.
#[derive(Error, Debug)]
pub enum Error {
    /// Capacity must be at least 1
    #[error("Invalid capacity: {0} (must be greater than zero)")]
    InvalidCapacity(usize),

    /// Configuration document could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
