use std::sync::Arc;

use crate::github::ProfileSource;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Both collaborators sit behind traits so tests can swap in fakes.
#[derive(Clone)]
pub struct AppState {
    /// GitHub profile/repository/readme lookups. Default: `GithubClient`.
    pub profiles: Arc<dyn ProfileSource>,
    /// Text generation backend. Default: `LlmClient` (Gemini).
    pub generator: Arc<dyn TextGenerator>,
}
