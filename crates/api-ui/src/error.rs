use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};

pub(crate) trait IntoStatusCode {
    fn status_code(&self) -> StatusCode;
}

/// JSON envelope returned by every failing API call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

pub(crate) fn error_into_response<E>(error: &E) -> Response
where
    E: IntoStatusCode + std::error::Error,
{
    let code = error.status_code();
    if code.is_server_error() {
        let source = error.source().map(ToString::to_string).unwrap_or_default();
        tracing::error!(status = code.as_u16(), source = %source, "{error}");
    } else {
        tracing::debug!(status = code.as_u16(), "{error}");
    }
    (code, Json(ErrorResponse::new(error.to_string()))).into_response()
}
