//! Fetch orchestration
//!
//! Runs one account lookup as a single logical operation: validate the
//! username, fetch the profile, fetch the repository list, normalize both.
//! The repo-list request is never issued unless the profile request already
//! succeeded, so an invalid username costs exactly one API call.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use octostats_core::{FetchError, SearchState};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::api::{ApiClientConfig, ApiResult, GitHubApiClient, UserApiClient};
use crate::classify::classify;
use crate::normalize::{normalize_profile, normalize_repo_list};

/// Orchestrates account searches against a [`UserApiClient`] and owns the
/// shared [`SearchState`] the presentation layer reads.
///
/// Single-flight: each attempt gets a monotonically increasing number and
/// only the highest-numbered attempt may write the shared state, so a slow
/// stale response never overwrites the result of a newer search. No retries
/// and no timeout are applied here; if the transport hangs, the pending
/// phase persists until it resolves.
pub struct SearchSession {
    client: Arc<dyn UserApiClient>,
    state: Arc<RwLock<SearchState>>,
    attempts: AtomicU64,
}

impl SearchSession {
    /// Create a session over any API client
    pub fn new(client: Arc<dyn UserApiClient>) -> Self {
        Self {
            client,
            state: Arc::new(RwLock::new(SearchState::default())),
            attempts: AtomicU64::new(0),
        }
    }

    /// Create a session against the public GitHub API
    pub fn github() -> ApiResult<Self> {
        let client = GitHubApiClient::new(ApiClientConfig::github())?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Snapshot of the shared state for rendering
    pub async fn state(&self) -> SearchState {
        self.state.read().await.clone()
    }

    /// Look up an account and its repository statistics.
    ///
    /// Always returns the state this attempt produced; the shared state is
    /// only updated when this attempt is still the newest one.
    pub async fn search(&self, username: &str) -> SearchState {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;

        // Reset to a clean pending state before any I/O so a re-render
        // during the fetch never shows the previous search's data.
        self.commit(attempt, SearchState::pending()).await;

        let result = self.run(username).await;
        if let Some(error) = &result.error {
            error.log();
        }

        self.commit(attempt, result.clone()).await;
        result
    }

    /// The sequential two-call pipeline for one attempt.
    async fn run(&self, username: &str) -> SearchState {
        let username = username.trim();
        if username.is_empty() {
            return SearchState::failed(FetchError::ValidationError(
                "Please enter a username".to_string(),
            ));
        }

        info!(username, "Searching GitHub account");

        let raw_profile = match self.client.fetch_profile(username).await {
            Ok(raw) => raw,
            Err(failure) => return SearchState::failed(classify(failure)),
        };

        let profile = match normalize_profile(raw_profile) {
            Ok(profile) => profile,
            Err(err) => {
                debug!(error = %err, "Malformed profile payload");
                return SearchState::failed(FetchError::Unexpected);
            }
        };

        let raw_repos = match self.client.fetch_repos(username).await {
            Ok(raw) => raw,
            Err(failure) => return SearchState::failed(classify(failure)),
        };

        let repos = match normalize_repo_list(raw_repos) {
            Ok(repos) => repos,
            Err(err) => {
                debug!(error = %err, "Malformed repository payload");
                return SearchState::failed(FetchError::Unexpected);
            }
        };

        // Both calls succeeded, but an account without repositories has
        // nothing to chart. This is a semantic failure, not a NotFound.
        if repos.is_empty() {
            return SearchState::failed(FetchError::ValidationError(
                "This account has no public repositories".to_string(),
            ));
        }

        info!(username, repo_count = repos.len(), "Search succeeded");

        SearchState::succeeded(profile, repos)
    }

    /// Write `state` to the shared slot unless a newer attempt exists.
    async fn commit(&self, attempt: u64, state: SearchState) {
        let mut shared = self.state.write().await;
        if self.attempts.load(Ordering::SeqCst) != attempt {
            debug!(attempt, "Dropping write from superseded attempt");
            return;
        }
        *shared = state;
    }
}
