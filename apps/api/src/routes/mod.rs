pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::generation::handlers as generation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analyze", post(analysis::handle_analyze))
        .route(
            "/api/v1/analyze/upload",
            post(analysis::handle_analyze_upload),
        )
        // LLM-backed API
        .route("/api/v1/chat", post(generation::handle_chat))
        .route(
            "/api/v1/generate-resume",
            post(generation::handle_generate_resume),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
