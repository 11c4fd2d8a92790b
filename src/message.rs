// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub reply: String,
}

/// Query string of the legacy `GET /get?msg=...` endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct LegacyQuery {
    #[serde(default)]
    pub msg: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LegacyResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
