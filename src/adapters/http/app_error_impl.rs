use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Shown for every server-side failure. Details stay in the logs.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();

        match self {
            AppError::Validation(msg) => {
                tracing::info!(code = code.as_str(), message = %msg, "Request rejected");
                error_resp(StatusCode::BAD_REQUEST, msg)
            }
            AppError::AlreadyOnWaitlist => {
                tracing::info!(code = code.as_str(), "Request rejected");
                error_resp(StatusCode::CONFLICT, self.to_string())
            }
            AppError::Database(_) | AppError::Internal(_) => {
                tracing::error!(code = code.as_str(), error = ?self, "Request failed");
                error_resp(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.into())
            }
        }
    }
}

fn error_resp(status: StatusCode, message: String) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

