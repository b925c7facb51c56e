use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public profile fields from `GET /users/{username}`.
///
/// Passed through to the prompt unchanged; every other upstream field is dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub public_repos: u64,
    pub created_at: Option<DateTime<Utc>>,
}

/// Projection of a repository record from `GET /users/{username}/repos`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub open_issues_count: u64,
}
