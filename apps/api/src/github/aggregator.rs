//! Profile Aggregator — turns a username into the bundle the prompt is built from.
//!
//! Lookups run one after another: profile, repositories, readme. A missing
//! profile aborts before the other two are issued. The readme is best-effort.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::github::models::{Profile, RepoSummary};
use crate::github::ProfileSource;

/// Max repositories that make it into the prompt.
const SELECTED_REPO_LIMIT: usize = 5;

/// Request-scoped aggregate of everything known about one developer.
///
/// Serializes with the profile fields at top level, followed by `repos` and `readme`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileBundle {
    #[serde(flatten)]
    pub profile: Profile,
    pub repos: Vec<RepoSummary>,
    pub readme: String,
}

/// Fetches profile, repositories and readme for `username`, in that order.
pub async fn aggregate_profile(
    source: &dyn ProfileSource,
    username: &str,
) -> Result<ProfileBundle, AppError> {
    if username.is_empty() {
        return Err(AppError::ProfileNotFound(String::new()));
    }

    let profile = source
        .fetch_profile(username)
        .await?
        .ok_or_else(|| AppError::ProfileNotFound(username.to_string()))?;

    let repos = source.list_repositories(username).await?;
    let repos = select_repositories(repos);

    let readme = match source.fetch_readme(username).await {
        Ok(Some(text)) => text,
        Ok(None) => String::new(),
        Err(e) => {
            warn!("README fetch for {username} failed, continuing without it: {e}");
            String::new()
        }
    };

    info!(
        "Aggregated profile for {username}: {} repos, readme {} bytes",
        repos.len(),
        readme.len()
    );

    Ok(ProfileBundle {
        profile,
        repos,
        readme,
    })
}

/// Picks up to five repositories, non-forks first.
///
/// Non-forks keep their upstream order; forks only fill slots the non-forks
/// leave empty.
pub fn select_repositories(repos: Vec<RepoSummary>) -> Vec<RepoSummary> {
    let (non_forks, forks): (Vec<_>, Vec<_>) = repos.into_iter().partition(|r| !r.fork);

    let fork_slots = SELECTED_REPO_LIMIT.saturating_sub(non_forks.len());

    non_forks
        .into_iter()
        .take(SELECTED_REPO_LIMIT)
        .chain(forks.into_iter().take(fork_slots))
        .collect()
}
