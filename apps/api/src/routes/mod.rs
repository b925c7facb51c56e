use axum::{
    routing::{get, MethodRouter},
    Router,
};

use crate::advisor::handlers;
use crate::state::AppState;

/// GET serves the page, POST asks for suggestions, anything else is a 405.
/// HEAD is routed explicitly; `get` would otherwise answer it.
fn advisor_routes() -> MethodRouter<AppState> {
    get(handlers::handle_index)
        .post(handlers::handle_suggest)
        .head(handlers::handle_method_not_allowed)
        .fallback(handlers::handle_method_not_allowed)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", advisor_routes())
        .route("/*path", advisor_routes())
        .with_state(state)
}
