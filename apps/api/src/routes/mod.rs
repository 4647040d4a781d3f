pub mod health;
pub mod page;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Browser surface
        .route("/", get(page::handle_index).post(page::handle_submit))
        .route("/reset", post(page::handle_reset))
        // JSON API
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .with_state(state)
}
