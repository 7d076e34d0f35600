use crate::error::{IntoStatusCode, error_into_response};
use axum::response::IntoResponse;
use core_explorer::error::ExplorerError;
use http::StatusCode;
use snafu::prelude::*;

pub type TablesResult<T> = Result<T, TablesAPIError>;

// Messages are fixed, the database error is only logged
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum TablesAPIError {
    #[snafu(display("Failed to get tables"))]
    GetTables { source: ExplorerError },
    #[snafu(display("Failed to get table data"))]
    GetTableData { source: ExplorerError },
}

impl IntoStatusCode for TablesAPIError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::GetTables { .. } | Self::GetTableData { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for TablesAPIError {
    fn into_response(self) -> axum::response::Response {
        error_into_response(&self)
    }
}
