use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::server::AppState;
use crate::variants::Variant;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    variant: Variant,
    cache_populated: bool,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    status: &'static str,
}

/// Health check endpoint
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        variant: state.chat.variant().variant,
        cache_populated: state.chat.resolver().cache().is_populated(),
    })
}

/// Wake the refresh scheduler; the crawl runs in the background
pub async fn refresh_handler(State(state): State<AppState>) -> (StatusCode, Json<RefreshResponse>) {
    state.refresh.trigger();
    (StatusCode::ACCEPTED, Json(RefreshResponse { status: "scheduled" }))
}
