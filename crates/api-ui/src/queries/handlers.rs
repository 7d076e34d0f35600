use crate::error::ErrorResponse;
use crate::queries::error::{
    ExecutionSnafu, MissingQuerySnafu, QueriesResult, RejectedSnafu,
};
use crate::queries::models::{QueryParameters, QueryResponse};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
};
use core_explorer::query_gate::ensure_select;
use snafu::{OptionExt, ResultExt};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(query),
    components(schemas(QueryResponse, ErrorResponse)),
    tags(
      (name = "queries", description = "Queries endpoints"),
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    path = "/api/query",
    operation_id = "runQuery",
    tags = ["queries"],
    params(QueryParameters),
    responses(
        (status = 200, description = "Returns result of the query", body = QueryResponse),
        (status = 400, description = "Missing sql parameter", body = ErrorResponse),
        (status = 403, description = "Statement is not a SELECT", body = ErrorResponse),
        (status = 500, description = "Query execution failed", body = ErrorResponse),
    )
)]
#[tracing::instrument(level = "debug", skip(state), err, ret(level = tracing::Level::TRACE))]
pub async fn query(
    State(state): State<AppState>,
    Query(parameters): Query<QueryParameters>,
) -> QueriesResult<Json<QueryResponse>> {
    let sql = parameters
        .sql
        .filter(|sql| !sql.is_empty())
        .context(MissingQuerySnafu)?;
    // Rejected statements never reach the database
    ensure_select(&sql).context(RejectedSnafu)?;

    let result = state
        .explorer_svc
        .query(&sql)
        .await
        .context(ExecutionSnafu)?;
    Ok(Json(QueryResponse::new(sql, result)))
}
