pub mod files;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::optimise::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/optimise", post(handlers::handle_optimise))
        .route("/api/v1/files/:name", get(files::handle_download))
        .with_state(state)
}
