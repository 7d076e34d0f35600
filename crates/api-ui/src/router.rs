use crate::layers::add_request_metadata;
use crate::queries::handlers::{ApiDoc as QueryApiDoc, query};
use crate::state::AppState;
use crate::tables::handlers::{
    ApiDoc as TableApiDoc, get_table_data, get_tables, get_unnamed_table_data,
};
use crate::views::handlers::{index, missing_table_name, query_form, run_query, table};
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SQLite Explorer API",
        description = "Read-only JSON API over a single SQLite database.",
        version = "0.1.0",
        license(
            name = "Apache 2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        ),
    ),
    tags()
)]
pub struct ApiDoc;

#[must_use]
pub fn ui_open_api_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
        .merge_from(TableApiDoc::openapi())
        .merge_from(QueryApiDoc::openapi())
}

async fn open_api_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ui_open_api_spec())
}

pub fn create_router() -> Router<AppState> {
    Router::new()
        // HTML
        .route("/", get(index))
        .route("/table/", get(missing_table_name))
        .route("/table/{tableName}", get(table))
        .route("/query", get(query_form).post(run_query))
        // JSON
        .route("/api/tables", get(get_tables))
        .route("/api/table/", get(get_unnamed_table_data))
        .route("/api/table/{tableName}", get(get_table_data))
        .route("/api/query", get(query))
        .route("/api/openapi.json", get(open_api_spec))
        .layer(axum::middleware::from_fn(add_request_metadata))
}
