use crate::errors::AppError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::HabitNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidDate(_) | AppError::InvalidHabitType(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            return (status, "Internal server error").into_response();
        }

        tracing::debug!(error = %self, "request rejected");
        (status, self.to_string()).into_response()
    }
}
