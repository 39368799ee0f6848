//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Preference lookup is not implemented for this OS
    #[error("Platform not supported: {0}")]
    Unsupported(String),

    /// The system query could not be run
    #[error("Failed to run `{command}`: {source}")]
    QueryFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The system query ran but reported failure
    #[error("`{command}` exited with {status}")]
    QueryStatus { command: String, status: String },

    /// The query output could not be interpreted
    #[error("Unrecognized preference value: {0:?}")]
    Parse(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
