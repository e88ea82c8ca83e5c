//! Core data type definitions

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Normalized account metadata from the `/users/{username}` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name as set by the account owner (absent when unset)
    pub display_name: Option<String>,
    /// Account bio (absent when unset)
    pub bio: Option<String>,
    /// Avatar image URL
    pub avatar_url: String,
    /// Follower count
    pub followers: u32,
    /// Following count
    pub following: u32,
    /// Number of public repositories reported by the profile endpoint
    pub public_repo_count: u32,
}

/// Per-repository statistics used for table and chart display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub id: u64,
    pub name: String,
    pub stars: u32,
    pub forks: u32,
    /// Repository size in KB, as reported by the API
    pub size: u32,
    /// Web URL of the repository
    pub url: String,
}

/// Lifecycle phase of a search attempt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
    /// No search has been issued yet
    #[default]
    Idle,
    /// A search is in flight
    Pending,
    /// Profile and repositories are populated
    Succeeded,
    /// The attempt failed; `error` is populated
    Failed,
}

/// Result of one search attempt, owned by the orchestrator.
///
/// Invariant: a state is either a success (profile + non-empty repos, no
/// error) or a failure (error, no profile, no repos) - never both. The
/// presentation layer only reads this value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    pub phase: SearchPhase,
    pub profile: Option<Profile>,
    /// Repository summaries in API return order (drives chart x-axis order)
    pub repos: Vec<RepoSummary>,
    pub error: Option<FetchError>,
}

impl SearchState {
    /// Fresh pending state. Clears any prior profile, repos, and error so a
    /// new search never flashes stale data.
    pub fn pending() -> Self {
        Self {
            phase: SearchPhase::Pending,
            ..Default::default()
        }
    }

    /// Completed state for a successful attempt.
    pub fn succeeded(profile: Profile, repos: Vec<RepoSummary>) -> Self {
        Self {
            phase: SearchPhase::Succeeded,
            profile: Some(profile),
            repos,
            error: None,
        }
    }

    /// Completed state for a failed attempt. Profile and repos stay empty.
    pub fn failed(error: FetchError) -> Self {
        Self {
            phase: SearchPhase::Failed,
            profile: None,
            repos: Vec::new(),
            error: Some(error),
        }
    }

    /// Whether a search is currently in flight
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, SearchPhase::Pending)
    }

    /// Whether the state holds displayable results
    pub fn is_success(&self) -> bool {
        matches!(self.phase, SearchPhase::Succeeded)
    }
}
