use crate::error::{IntoStatusCode, error_into_response};
use axum::response::IntoResponse;
use core_explorer::error::ExplorerError;
use http::StatusCode;
use snafu::prelude::*;

pub type QueriesResult<T> = Result<T, QueriesAPIError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum QueriesAPIError {
    #[snafu(display("Missing 'sql' query parameter"))]
    MissingQuery,
    // Gate rejection, carries its own user facing message
    #[snafu(display("{source}"))]
    Rejected { source: ExplorerError },
    #[snafu(display("Query execution failed: {source}"))]
    Execution { source: ExplorerError },
}

impl IntoStatusCode for QueriesAPIError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingQuery => StatusCode::BAD_REQUEST,
            Self::Rejected { .. } => StatusCode::FORBIDDEN,
            Self::Execution { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for QueriesAPIError {
    fn into_response(self) -> axum::response::Response {
        error_into_response(&self)
    }
}
