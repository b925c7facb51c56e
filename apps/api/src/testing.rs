//! In-memory fakes for the upstream seams, shared by unit and router tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use tokio::net::TcpListener;

use crate::github::models::{Profile, RepoSummary};
use crate::github::{GithubError, ProfileSource};
use crate::llm_client::{LlmError, TextGenerator};

/// What the fake readme lookup should do.
#[derive(Clone)]
pub enum ReadmeBehavior {
    Found(String),
    Missing,
    Fails,
}

/// Scripted `ProfileSource` that records every call it receives.
pub struct FakeProfileSource {
    pub profile: Option<Profile>,
    pub repos: Vec<RepoSummary>,
    pub readme: ReadmeBehavior,
    pub calls: Mutex<Vec<String>>,
}

impl FakeProfileSource {
    pub fn new(profile: Option<Profile>, repos: Vec<RepoSummary>) -> Self {
        Self {
            profile,
            repos,
            readme: ReadmeBehavior::Missing,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_readme(mut self, readme: ReadmeBehavior) -> Self {
        self.readme = readme;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str, username: &str) {
        self.calls.lock().unwrap().push(format!("{call}:{username}"));
    }
}

#[async_trait]
impl ProfileSource for FakeProfileSource {
    async fn fetch_profile(&self, username: &str) -> Result<Option<Profile>, GithubError> {
        self.record("profile", username);
        Ok(self.profile.clone())
    }

    async fn list_repositories(&self, username: &str) -> Result<Vec<RepoSummary>, GithubError> {
        self.record("repos", username);
        Ok(self.repos.clone())
    }

    async fn fetch_readme(&self, username: &str) -> Result<Option<String>, GithubError> {
        self.record("readme", username);
        match &self.readme {
            ReadmeBehavior::Found(text) => Ok(Some(text.clone())),
            ReadmeBehavior::Missing => Ok(None),
            ReadmeBehavior::Fails => Err(GithubError::Api {
                status: 503,
                message: "unavailable".to_string(),
            }),
        }
    }
}

/// Scripted `TextGenerator` that captures the last prompt it was given.
pub struct FakeGenerator {
    pub reply: Option<String>,
    pub last_prompt: Mutex<Option<String>>,
}

impl FakeGenerator {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(text.to_string()),
            last_prompt: Mutex::new(None),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            last_prompt: Mutex::new(None),
        })
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        self.reply.clone().ok_or(LlmError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        })
    }
}

pub fn profile(name: &str) -> Profile {
    Profile {
        name: Some(name.to_string()),
        followers: 12,
        following: 3,
        public_repos: 7,
        ..Profile::default()
    }
}

pub fn repo(name: &str, fork: bool) -> RepoSummary {
    RepoSummary {
        name: name.to_string(),
        fork,
        ..RepoSummary::default()
    }
}

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn spawn_stub(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// A base URL with nothing listening behind it.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
