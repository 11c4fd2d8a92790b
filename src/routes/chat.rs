use axum::{
    Json,
    extract::{Query, State, rejection::{JsonRejection, QueryRejection}},
};
use tracing::debug;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, LegacyQuery, LegacyResponse},
    services::chatbot::{ChatMessage, ChatReply},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload?;
    let reply = answer(&state, payload.message);
    Ok(Json(ChatResponse { reply: reply.text }))
}

// Query-string variant used by older front ends: `GET /get?msg=...`.
pub async fn legacy_chat_handler(
    State(state): State<SharedState>,
    query: Result<Query<LegacyQuery>, QueryRejection>,
) -> Result<Json<LegacyResponse>, AppError> {
    let Query(query) = query?;
    let reply = answer(&state, query.msg);
    Ok(Json(LegacyResponse { response: reply.text }))
}

fn answer(state: &SharedState, text: String) -> ChatReply {
    let message = ChatMessage::new(text);
    let reply = state.responder.respond(&message);
    debug!(kind = ?reply.kind, chars = message.text().chars().count(), "chat reply");
    reply
}
