use axum::{Json, Router, response::IntoResponse, routing::get};
use serde::Serialize;

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Liveness only. The store is not probed.
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}
