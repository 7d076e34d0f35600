use crate::views::models::ErrorView;
use askama::Template;
use axum::response::{Html, IntoResponse, Response};
use core_explorer::error::ExplorerError;
use http::StatusCode;
use snafu::prelude::*;

pub type ViewResult<T> = Result<T, ViewError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ViewError {
    #[snafu(display("Failed to list tables: {source}"))]
    ListTables {
        db_name: String,
        source: ExplorerError,
    },
    #[snafu(display("Failed to fetch table data: {source}"))]
    TableData {
        db_name: String,
        source: ExplorerError,
    },
    #[snafu(display("Table name not specified"))]
    MissingTableName { db_name: String },
    #[snafu(display("Failed to render page: {source}"))]
    Render { source: askama::Error },
}

impl ViewError {
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingTableName { .. } => StatusCode::BAD_REQUEST,
            Self::ListTables { .. } | Self::TableData { .. } | Self::Render { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn db_name(&self) -> &str {
        match self {
            Self::ListTables { db_name, .. }
            | Self::TableData { db_name, .. }
            | Self::MissingTableName { db_name } => db_name,
            Self::Render { .. } => "",
        }
    }
}

impl IntoResponse for ViewError {
    fn into_response(self) -> Response {
        let code = self.status_code();
        let message = self.to_string();
        if code.is_server_error() {
            tracing::error!(status = code.as_u16(), "{message}");
        }
        // A failed render is not retried through the template engine
        if matches!(self, Self::Render { .. }) {
            return (code, message).into_response();
        }
        let view = ErrorView {
            db_name: self.db_name().to_string(),
            message,
        };
        match view.render() {
            Ok(html) => (code, Html(html)).into_response(),
            Err(err) => {
                tracing::error!("Failed to render error view: {err}");
                (code, view.message).into_response()
            }
        }
    }
}
