pub mod health;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Builds the HTTP surface. Deliberately a stub: a greeting and a health
/// probe. The job/auth/candidate API routes of the eventual product are not
/// implemented; all domain state lives in the in-process stores.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .with_state(state)
}
