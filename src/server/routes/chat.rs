use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ButtonRequest {
    #[serde(default)]
    pub button: String,
}

#[derive(Debug, Serialize)]
pub struct ReplyResponse {
    pub reply: String,
}

/// Chat endpoint. Always 200; failures are folded into the reply text.
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ReplyResponse> {
    let reply = state.chat.reply(&request.message).await;
    Json(ReplyResponse { reply })
}

/// Product button endpoint
pub async fn button_handler(
    State(state): State<AppState>,
    Json(request): Json<ButtonRequest>,
) -> Json<ReplyResponse> {
    let variant = state.chat.variant();
    let reply = state
        .chat
        .button_reply(&request.button)
        .unwrap_or(variant.default_reply);
    Json(ReplyResponse {
        reply: reply.to_string(),
    })
}
