//! HTTP API for transcripts and summaries.
//!
//! Every endpoint validates its input before touching a provider. Empty
//! results map to 404 and any provider error maps to 400 with the error
//! message as `detail`.

mod error;
mod handlers;

pub use error::{require_min_length, ApiError, MIN_INPUT_CHARS};

use crate::orchestrator::Orchestrator;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
pub struct AppState {
    pub orchestrator: Orchestrator,
}

impl AppState {
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self { orchestrator }
    }
}

/// Build the application router.
///
/// `/summarize_text` accepts a JSON body over POST and query parameters over GET.
pub fn router(state: Arc<AppState>, cors: bool) -> Router {
    let app = Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/transcript", get(handlers::get_transcript))
        .route(
            "/summarize_text",
            get(handlers::summarize_text_query).post(handlers::summarize_text_json),
        )
        .route("/summary", get(handlers::get_summary))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if cors {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        app
    }
}
