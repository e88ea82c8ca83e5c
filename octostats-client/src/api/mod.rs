//! Transport layer for the GitHub REST API
//!
//! Defines the client abstraction the search pipeline runs against, the raw
//! payload shapes the API returns, and the transport failure type consumed
//! by the error classifier. The production implementation lives in
//! [`github`]; tests substitute their own [`UserApiClient`] impls.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

pub mod github;

pub use github::GitHubApiClient;

pub type ApiResult<T> = Result<T, TransportError>;

/// Raw profile payload from `GET /users/{username}`.
///
/// Every field is optional here; the normalizer decides which ones are
/// required and which fall back to a default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProfile {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub followers: Option<u32>,
    pub following: Option<u32>,
    pub public_repos: Option<u32>,
}

/// Raw repository payload element from `GET /users/{username}/repos`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRepo {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub stargazers_count: Option<u32>,
    pub forks_count: Option<u32>,
    pub size: Option<u32>,
    pub html_url: Option<String>,
}

/// Error body the GitHub API attaches to non-success responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}

/// Unclassified failure of a single HTTP exchange.
///
/// The three variants keep the classifier's distinctions intact: the server
/// answered with an error status, the request left but nothing came back,
/// or the failure happened on our side of the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Server responded with a non-success status; `message` carries the
    /// error body's `message` field when one was present
    #[error("GitHub API responded with HTTP {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    /// Request was sent but no response arrived (timeout, DNS failure,
    /// connection refused)
    #[error("no response from GitHub API: {detail}")]
    NoResponse { detail: String },

    /// Client-side failure: request construction or payload decoding
    #[error("client-side request failure: {detail}")]
    Client { detail: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() || err.is_decode() {
            TransportError::Client {
                detail: err.to_string(),
            }
        } else {
            // Timeouts, connect failures, and mid-flight I/O errors all mean
            // we never got a usable response.
            TransportError::NoResponse {
                detail: err.to_string(),
            }
        }
    }
}

/// Trait for GitHub user API clients
#[async_trait]
pub trait UserApiClient: Send + Sync {
    /// Fetch the account profile for a username
    async fn fetch_profile(&self, username: &str) -> ApiResult<RawProfile>;

    /// Fetch the account's repository list, in the API's return order
    async fn fetch_repos(&self, username: &str) -> ApiResult<Vec<RawRepo>>;
}

/// Configuration for API clients
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string (GitHub rejects requests without one)
    pub user_agent: String,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            timeout_seconds: 30,
            user_agent: "octostats/0.1".to_string(),
        }
    }
}

impl ApiClientConfig {
    /// Configuration for the public GitHub API
    pub fn github() -> Self {
        Self::default()
    }

    /// Override the base URL (useful for GitHub Enterprise or test servers)
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_config_defaults() {
        let config = ApiClientConfig::github();
        assert_eq!(config.base_url, "https://api.github.com");
        assert_eq!(config.timeout_seconds, 30);
        assert!(!config.user_agent.is_empty());
    }

    #[test]
    fn test_config_builders() {
        let config = ApiClientConfig::github()
            .with_base_url("https://github.example.com/api/v3".to_string())
            .with_timeout(5);
        assert_eq!(config.base_url, "https://github.example.com/api/v3");
        assert_eq!(config.timeout_seconds, 5);
    }

    #[test]
    fn test_raw_profile_tolerates_missing_fields() {
        let raw: RawProfile = serde_json::from_str("{}").unwrap();
        assert!(raw.avatar_url.is_none());
        assert!(raw.followers.is_none());
    }

    #[test]
    fn test_raw_repo_ignores_extra_fields() {
        let raw: RawRepo = serde_json::from_str(
            r#"{"id": 7, "name": "r", "stargazers_count": 1, "forks_count": 0,
                "size": 42, "html_url": "h", "watchers": 9, "language": "Rust"}"#,
        )
        .unwrap();
        assert_eq!(raw.id, Some(7));
        assert_eq!(raw.size, Some(42));
    }
}
