//! Terminal rendering of search results
//!
//! Pure string builders so the output is testable: a profile card, a
//! repository table, and a horizontal bar chart of stars and forks per
//! repository. Chart rows keep the API's return order, matching the order
//! the repository table uses.

use octostats_core::{Profile, RepoSummary};

/// Maximum bar width in characters
const CHART_WIDTH: usize = 40;

/// One-paragraph profile card.
pub fn render_profile(profile: &Profile) -> String {
    let mut out = String::new();

    if let Some(name) = &profile.display_name {
        out.push_str(&format!("{}\n", name));
    }
    if let Some(bio) = &profile.bio {
        out.push_str(&format!("{}\n", bio));
    }
    out.push_str(&format!(
        "{} followers · {} following · {} public repos\n",
        profile.followers, profile.following, profile.public_repo_count
    ));
    out.push_str(&format!("avatar: {}\n", profile.avatar_url));

    out
}

/// Fixed-width table of per-repository statistics, in API return order.
pub fn render_repo_table(repos: &[RepoSummary]) -> String {
    let name_width = repos
        .iter()
        .map(|r| r.name.len())
        .chain(std::iter::once("repository".len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!(
        "{:<name_width$}  {:>7}  {:>7}  {:>9}\n",
        "repository", "stars", "forks", "size (KB)"
    ));
    for repo in repos {
        out.push_str(&format!(
            "{:<name_width$}  {:>7}  {:>7}  {:>9}\n",
            repo.name, repo.stars, repo.forks, repo.size
        ));
    }

    out
}

/// Horizontal bar chart with a stars row and a forks row per repository.
pub fn render_chart(repos: &[RepoSummary]) -> String {
    let max_value = repos
        .iter()
        .flat_map(|r| [r.stars, r.forks])
        .max()
        .unwrap_or(0);

    if max_value == 0 {
        return "(no stars or forks to chart)\n".to_string();
    }

    let name_width = repos.iter().map(|r| r.name.len()).max().unwrap_or(0);

    let mut out = String::new();
    for repo in repos {
        out.push_str(&format!(
            "{:<name_width$}  stars {:>6} {}\n",
            repo.name,
            repo.stars,
            bar(repo.stars, max_value)
        ));
        out.push_str(&format!(
            "{:<name_width$}  forks {:>6} {}\n",
            "",
            repo.forks,
            bar(repo.forks, max_value)
        ));
    }

    out
}

/// Scale a value to the chart width. Non-zero values always get at least
/// one tick so small bars stay visible next to large ones.
fn bar(value: u32, max_value: u32) -> String {
    let width = (value as usize * CHART_WIDTH) / max_value as usize;
    let width = if value > 0 { width.max(1) } else { width };
    "█".repeat(width)
}
