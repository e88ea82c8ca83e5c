//! User-facing failure taxonomy
//!
//! Every failed search attempt surfaces exactly one of these variants. The
//! `Display` string of each variant is the fixed message shown to the user,
//! so the presentation layer never interprets variants itself.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

/// Classified failure of a search attempt.
///
/// The taxonomy separates "server said no" (`NotFound`, `RateLimited`,
/// `ApiError`) from "never reached a server" (`NetworkError`) from local
/// problems (`ValidationError`, `Unexpected`). Each variant carries its own
/// distinct user message; `ApiError` and `ValidationError` embed detail.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FetchError {
    /// The profile endpoint answered 404 for this username
    #[error("No GitHub account found with that username")]
    NotFound,

    /// The API answered 403: the unauthenticated rate limit is exhausted
    #[error("GitHub API rate limit exceeded, please try again later")]
    RateLimited,

    /// Any other non-success status; the message carries server detail
    /// when the error body provided any
    #[error("GitHub API error: {0}")]
    ApiError(String),

    /// The request was sent but no response ever arrived
    #[error("Network error, please check your connection")]
    NetworkError,

    /// A local, pre- or post-transport check failed (empty username,
    /// account with no public repositories)
    #[error("{0}")]
    ValidationError(String),

    /// A failure on our side: request construction or a malformed payload
    #[error("Something went wrong, please try again")]
    Unexpected,
}

impl FetchError {
    /// Whether retrying the same search later could plausibly succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, FetchError::RateLimited | FetchError::NetworkError)
    }

    /// Log the error at a level matching its severity: transient transport
    /// trouble is a warning, everything local or unexplained is an error.
    pub fn log(&self) {
        match self {
            FetchError::NetworkError | FetchError::RateLimited => {
                warn!(error = %self, "Search failed (may be transient)");
            }
            FetchError::NotFound | FetchError::ValidationError(_) => {
                warn!(error = %self, "Search rejected");
            }
            FetchError::ApiError(_) | FetchError::Unexpected => {
                error!(error = %self, "Search failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_distinct() {
        let variants = [
            FetchError::NotFound,
            FetchError::RateLimited,
            FetchError::ApiError("boom".to_string()),
            FetchError::NetworkError,
            FetchError::ValidationError("Please enter a username".to_string()),
            FetchError::Unexpected,
        ];

        let messages: Vec<String> = variants.iter().map(|e| e.to_string()).collect();
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_api_error_carries_server_detail() {
        let err = FetchError::ApiError("Server Error".to_string());
        assert_eq!(err.to_string(), "GitHub API error: Server Error");
    }

    #[test]
    fn test_transient_classification() {
        assert!(FetchError::RateLimited.is_transient());
        assert!(FetchError::NetworkError.is_transient());
        assert!(!FetchError::NotFound.is_transient());
        assert!(!FetchError::Unexpected.is_transient());
    }
}
