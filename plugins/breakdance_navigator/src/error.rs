//! Navigator error types.

use navigator_sdk::HostError;
use thiserror::Error;

/// Errors surfaced by the navigator's hook callbacks.
#[derive(Debug, Error)]
pub enum NavigatorError {
    #[error("host error: {0}")]
    Host(#[from] HostError),
}

/// Result type alias using NavigatorError.
pub type NavigatorResult<T> = Result<T, NavigatorError>;
