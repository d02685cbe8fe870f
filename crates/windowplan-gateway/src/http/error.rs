use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::warn;
use windowplan_core::WindowplanError;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
}

/// Maps the core error taxonomy onto HTTP responses.
pub struct ApiError(pub WindowplanError);

impl From<WindowplanError> for ApiError {
    fn from(err: WindowplanError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            WindowplanError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            WindowplanError::NotFound { .. } => StatusCode::NOT_FOUND,
            WindowplanError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(code = self.0.code(), error = %self.0, "request failed");
        }
        let body = ErrorBody {
            error: self.0.to_string(),
            code: self.0.code(),
        };
        (status, Json(body)).into_response()
    }
}
