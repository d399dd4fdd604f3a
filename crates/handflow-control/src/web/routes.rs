//! HTTP routes for the web feed

use super::server::{AppState, SharedSnapshot};
use super::websocket;
use axum::{extract::State, routing::get, Json, Router};

/// Build the feed router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/state", get(current_state))
        .route("/ws", get(websocket::ws_handler))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn current_state(State(state): State<AppState>) -> Json<SharedSnapshot> {
    Json(*state.snapshot.read())
}
