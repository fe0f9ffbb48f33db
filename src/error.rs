//! Client error types.

use thiserror::Error;

/// Errors that can occur when making a chat completion call.
///
/// HTTP error statuses are not represented here: a 4xx/5xx response body
/// is returned to the caller as text like any other response.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Caller input rejected before any network I/O
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// HTTP request failed at the transport level
    #[error("http request failed: {0}")]
    Request(#[from] reqwest::Error),
}
