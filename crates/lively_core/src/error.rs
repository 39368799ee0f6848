//! Context errors

use thiserror::Error;

/// Errors from installing or configuring the animation context
#[derive(Error, Debug)]
pub enum ContextError {
    /// A global context is already installed
    #[error("AnimationContext::init() called more than once")]
    AlreadyInitialized,
}

/// Result type for context operations
pub type Result<T> = std::result::Result<T, ContextError>;
