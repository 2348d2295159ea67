use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::{Value, json};

use crate::{review, state::ApiState, theme};

/// Name reported by the identity probe
pub const APP_NAME: &str = "app_idiomas";

pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/health/ready", get(ready))
        .merge(theme::routes())
        .merge(review::routes())
        .fallback(handler_404)
}

/// Liveness and identity probe
async fn root() -> Json<Value> {
    Json(json!({
        "ok": true,
        "name": APP_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn ready(State(state): State<ApiState>) -> Json<Value> {
    Json(json!({
        "status": "ready",
        "words": state.catalog.len(),
        "themes": state.catalog.themes().len(),
        "backend_configured": state.backend.configured(),
    }))
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "detail": "Not Found" })),
    )
}
