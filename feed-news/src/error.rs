//! Error types for the news module

use std::time::Duration;

use feed_core::ProviderKind;
use thiserror::Error;

/// Errors that can occur while talking to a news provider
#[derive(Debug, Error)]
pub enum NewsError {
    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// API returned a non-2xx response
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Failed to parse API response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Provider did not answer in time
    #[error("{provider} timed out after {after:?}")]
    Timeout {
        provider: ProviderKind,
        after: Duration,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl NewsError {
    /// HTTP status carried by the error, if the upstream answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            NewsError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
