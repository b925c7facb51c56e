//! GitHub client — profile, repository and readme lookups for the advisor.
//!
//! All three calls are unauthenticated reads. GitHub rejects requests without a
//! `User-Agent`, so every request carries one via the client's default headers.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

pub mod aggregator;
pub mod models;

use models::{Profile, RepoSummary};

const CLIENT_USER_AGENT: &str = "project-advisor/1.0";
const GITHUB_ACCEPT: &str = "application/vnd.github+json";
/// Repositories requested per listing, most recently updated first.
pub const REPO_PAGE_SIZE: usize = 10;

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Upstream seam for the profile aggregator.
///
/// Each lookup has its own result shape: a missing profile is `Ok(None)`,
/// a missing readme is `Ok(None)`, transport failures are `Err`.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(&self, username: &str) -> Result<Option<Profile>, GithubError>;

    async fn list_repositories(&self, username: &str) -> Result<Vec<RepoSummary>, GithubError>;

    async fn fetch_readme(&self, username: &str) -> Result<Option<String>, GithubError>;
}

#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    api_url: String,
    raw_url: String,
}

impl GithubClient {
    pub fn new(api_url: String, raw_url: String) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build GitHub HTTP client")?;

        Ok(Self {
            client,
            api_url,
            raw_url,
        })
    }
}

#[async_trait]
impl ProfileSource for GithubClient {
    async fn fetch_profile(&self, username: &str) -> Result<Option<Profile>, GithubError> {
        let url = format!("{}/users/{username}", self.api_url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, GITHUB_ACCEPT)
            .send()
            .await?;

        if !response.status().is_success() {
            debug!("Profile lookup for {username} returned {}", response.status());
            return Ok(None);
        }

        Ok(Some(response.json::<Profile>().await?))
    }

    async fn list_repositories(&self, username: &str) -> Result<Vec<RepoSummary>, GithubError> {
        let url = format!("{}/users/{username}/repos", self.api_url);
        let per_page = REPO_PAGE_SIZE.to_string();

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, GITHUB_ACCEPT)
            .query(&[("sort", "updated"), ("per_page", per_page.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GithubError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let repos: Vec<RepoSummary> = response.json().await?;
        debug!("Fetched {} repositories for {username}", repos.len());

        Ok(repos)
    }

    async fn fetch_readme(&self, username: &str) -> Result<Option<String>, GithubError> {
        // Profile readme lives in the repo named after the user.
        let url = format!("{}/{username}/{username}/main/README.md", self.raw_url);

        let response = self.client.get(&url).send().await?;

        match response.status() {
            status if status.is_success() => Ok(Some(response.text().await?)),
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(GithubError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            }),
        }
    }
}
