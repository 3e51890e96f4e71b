//! Common error types for TutorBoard

use thiserror::Error;

/// Common result type for TutorBoard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the core engine
///
/// Field-level validation failures are deliberately not represented here;
/// they are recoverable and travel as [`crate::validate::FieldErrors`].
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A backing document is unreadable or does not parse into its expected shape
    #[error("Corrupt document {path}: {reason}")]
    Corrupt { path: String, reason: String },

    /// Requested tutor, goal or slot does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid caller-supplied argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
