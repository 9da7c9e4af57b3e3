use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    response::IntoResponse,
    routing::get,
};
use serde::Serialize;
use serde_json::Value;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    use_cases::waitlist::SIGNUP_CONFIRMATION,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_count).post(join_waitlist))
}

#[derive(Serialize)]
struct JoinResponse {
    success: bool,
    message: &'static str,
}

#[derive(Serialize)]
struct CountResponse {
    count: u64,
}

/// Body is parsed by hand so that wrongly typed fields reach the validators
/// (and get a 400) instead of failing extraction. A body that is not JSON, or
/// is a bare `null`, is a server-side failure.
async fn join_waitlist(
    State(app_state): State<AppState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let payload: Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::Internal(format!("malformed request body: {e}")))?;
    if payload.is_null() {
        return Err(AppError::Internal("request body is null".into()));
    }

    app_state
        .waitlist_use_cases
        .register(payload.get("email"), payload.get("userType"))
        .await?;

    Ok(Json(JoinResponse {
        success: true,
        message: SIGNUP_CONFIRMATION,
    }))
}

async fn get_count(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(CountResponse {
        count: app_state.waitlist_use_cases.count().await,
    })
}
