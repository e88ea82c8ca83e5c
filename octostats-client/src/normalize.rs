//! Response normalization
//!
//! Pure mapping from raw API payloads into the internal data model. No I/O
//! here; the only failure mode is a missing required field, which the
//! orchestrator surfaces as `FetchError::Unexpected`.

use octostats_core::{Profile, RepoSummary};
use thiserror::Error;

use crate::api::{RawProfile, RawRepo};

/// A required field was absent from an API payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required field `{field}` in API response")]
pub struct NormalizeError {
    pub field: &'static str,
}

fn missing(field: &'static str) -> NormalizeError {
    NormalizeError { field }
}

/// Build a [`Profile`] from the raw payload.
///
/// Display name and bio stay absent when unset; the counts default to 0
/// when the API omits them. Only the avatar URL is required.
pub fn normalize_profile(raw: RawProfile) -> Result<Profile, NormalizeError> {
    Ok(Profile {
        display_name: raw.name,
        bio: raw.bio,
        avatar_url: raw.avatar_url.ok_or_else(|| missing("avatar_url"))?,
        followers: raw.followers.unwrap_or(0),
        following: raw.following.unwrap_or(0),
        public_repo_count: raw.public_repos.unwrap_or(0),
    })
}

/// Build a [`RepoSummary`] from a raw repository element. Every field is
/// required here; stats with a missing source have no meaningful default.
pub fn normalize_repo(raw: RawRepo) -> Result<RepoSummary, NormalizeError> {
    Ok(RepoSummary {
        id: raw.id.ok_or_else(|| missing("id"))?,
        name: raw.name.ok_or_else(|| missing("name"))?,
        stars: raw.stargazers_count.ok_or_else(|| missing("stargazers_count"))?,
        forks: raw.forks_count.ok_or_else(|| missing("forks_count"))?,
        size: raw.size.ok_or_else(|| missing("size"))?,
        url: raw.html_url.ok_or_else(|| missing("html_url"))?,
    })
}

/// Normalize a whole repository list, preserving the API's return order.
/// An empty input is valid output; the orchestrator owns the empty-account
/// policy.
pub fn normalize_repo_list(raw: Vec<RawRepo>) -> Result<Vec<RepoSummary>, NormalizeError> {
    raw.into_iter().map(normalize_repo).collect()
}
