use anyhow::Context;
use axum::{extract::State, response::Html};

use crate::{error::AppError, state::SharedState};

/// Serves the chat page. The file is read per request so edits show up without a restart.
pub async fn index_handler(State(state): State<SharedState>) -> Result<Html<String>, AppError> {
    let page = tokio::fs::read_to_string(&state.template_path)
        .await
        .with_context(|| format!("Failed to read chat page: {}", state.template_path.display()))?;
    Ok(Html(page))
}
