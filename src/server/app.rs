//! Application setup and router configuration.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::router::ChatRouter;
use crate::scheduler::RefreshHandle;
use crate::server::routes::{button_handler, chat_handler, health_handler, refresh_handler};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatRouter>,
    pub refresh: RefreshHandle,
}

impl AppState {
    pub fn new(chat: ChatRouter, refresh: RefreshHandle) -> Self {
        Self {
            chat: Arc::new(chat),
            refresh,
        }
    }
}

/// Build the axum application.
///
/// `/button` is only routed for deployments that define buttons.
pub fn build_app(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/chat", post(chat_handler))
        .route("/refresh", post(refresh_handler))
        .route("/health", get(health_handler));

    if state.chat.variant().has_buttons() {
        router = router.route("/button", post(button_handler));
    }

    router
        // Any origin, method and header
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
