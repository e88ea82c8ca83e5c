//! Octostats Client - GitHub lookup pipeline
//!
//! Fetches an account's profile and repository list, normalizes the raw
//! payloads into the core data model, and classifies every failure into the
//! user-facing [`FetchError`](octostats_core::FetchError) taxonomy. The
//! [`SearchSession`] ties the pieces together as one asynchronous `search`
//! operation.

pub mod api;
pub mod classify;
pub mod normalize;
pub mod search;

pub use api::{ApiClientConfig, ApiResult, GitHubApiClient, RawProfile, RawRepo, TransportError, UserApiClient};
pub use classify::classify;
pub use normalize::{normalize_profile, normalize_repo, normalize_repo_list, NormalizeError};
pub use search::SearchSession;
