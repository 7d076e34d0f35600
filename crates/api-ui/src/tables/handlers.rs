use crate::PageParameters;
use crate::error::ErrorResponse;
use crate::state::AppState;
use crate::tables::error::{GetTableDataSnafu, GetTablesSnafu, TablesResult};
use crate::tables::models::{Table, TableDataResponse};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use core_explorer::PageRequest;
use snafu::ResultExt;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(get_tables, get_table_data),
    components(schemas(Table, TableDataResponse, ErrorResponse)),
    tags(
        (name = "tables", description = "Tables endpoints.")
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    path = "/api/tables",
    operation_id = "getTables",
    tags = ["tables"],
    responses(
        (status = 200, description = "User tables sorted by name", body = Vec<Table>),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[tracing::instrument(level = "debug", skip(state), err, ret(level = tracing::Level::TRACE))]
pub async fn get_tables(State(state): State<AppState>) -> TablesResult<Json<Vec<Table>>> {
    let tables = state
        .explorer_svc
        .list_tables()
        .await
        .context(GetTablesSnafu)?;
    Ok(Json(tables.into_iter().map(Table::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/table/{tableName}",
    operation_id = "getTableData",
    tags = ["tables"],
    params(
        ("tableName" = String, Path, description = "Table Name"),
        PageParameters,
    ),
    responses(
        (status = 200, description = "One page of table rows", body = TableDataResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[tracing::instrument(level = "debug", skip(state), err, ret(level = tracing::Level::TRACE))]
pub async fn get_table_data(
    State(state): State<AppState>,
    Path(table_name): Path<String>,
    Query(parameters): Query<PageParameters>,
) -> TablesResult<Json<TableDataResponse>> {
    let request = PageRequest::from_param(table_name, parameters.page.as_deref());
    let page = state
        .explorer_svc
        .table_page(request)
        .await
        .context(GetTableDataSnafu)?;
    Ok(Json(TableDataResponse::from(page)))
}

// `/api/table/` without a name is looked up like any other unknown table
pub async fn get_unnamed_table_data(
    state: State<AppState>,
    parameters: Query<PageParameters>,
) -> TablesResult<Json<TableDataResponse>> {
    get_table_data(state, Path(String::new()), parameters).await
}
