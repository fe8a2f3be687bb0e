pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::feedback::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/feedback", post(handlers::handle_feedback))
        .route(
            "/api/v1/feedback/socratic",
            post(handlers::handle_socratic),
        )
        .route(
            "/api/v1/analysis/citations",
            post(handlers::handle_citation_report),
        )
        .route(
            "/api/v1/writing-types",
            get(handlers::handle_writing_types),
        )
        .with_state(state)
}
