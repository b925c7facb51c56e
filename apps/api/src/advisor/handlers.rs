//! Axum route handlers for the advisor page and suggestion endpoint.

use axum::{
    extract::State,
    http::Uri,
    response::Html,
    Json,
};
use serde::Serialize;

use crate::advisor::generator::suggest_projects;
use crate::errors::AppError;
use crate::state::AppState;

/// The single-page UI, served for every GET.
pub const INDEX_HTML: &str = include_str!("../../static/index.html");

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    /// Misspelled on the wire; existing clients read `succes`.
    #[serde(rename = "succes")]
    pub success: bool,
    pub suggestions: String,
}

/// GET /{any}
pub async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// POST /{username}
///
/// The username is the last path segment, so `/a/b/mona` asks about `mona`.
pub async fn handle_suggest(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<SuggestResponse>, AppError> {
    let username = username_from_path(uri.path());

    let suggestions =
        suggest_projects(state.profiles.as_ref(), state.generator.as_ref(), username).await?;

    Ok(Json(SuggestResponse {
        success: true,
        suggestions,
    }))
}

/// Any method other than GET or POST.
pub async fn handle_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

fn username_from_path(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}
