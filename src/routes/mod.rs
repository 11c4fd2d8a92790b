// src/routes/mod.rs
pub mod chat;
pub mod pages;

use crate::{error::{AppError, panic_response}, state::SharedState};
use axum::{
    Router,
    routing::{get, post},
};
use chat::{chat_handler, legacy_chat_handler};
use pages::index_handler;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router(state: SharedState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);
    let enable_cors = state.enable_cors;

    let router = Router::new()
        .route("/", get(index_handler))
        .route("/chat", post(chat_handler))
        .route("/get", get(legacy_chat_handler))
        .route("/health", get(|| async { "OK" }))
        .nest_service("/static", static_files)
        .fallback(|| async { AppError::NotFound })
        .with_state(state);

    with_layers(router, enable_cors)
}

fn with_layers(router: Router, enable_cors: bool) -> Router {
    let router = router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http());

    if enable_cors {
        router.layer(CorsLayer::very_permissive())
    } else {
        router
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::INTERNAL_ERROR_MESSAGE;
    use crate::message::ErrorResponse;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    async fn explode() -> &'static str {
        panic!("secret detail from a broken handler")
    }

    #[tokio::test]
    async fn panicking_handler_becomes_generic_500() {
        let app = with_layers(Router::new().route("/explode", get(explode)), true);

        let response = app
            .oneshot(Request::builder().uri("/explode").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let err: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(err.error, INTERNAL_ERROR_MESSAGE);
    }
}
