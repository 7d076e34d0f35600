use crate::PageParameters;
use crate::state::AppState;
use crate::views::error::{ListTablesSnafu, MissingTableNameSnafu, TableDataSnafu, ViewResult};
use crate::views::models::{IndexView, QueryFormParameters, QueryView, TableView};
use crate::views::render::render_template;
use axum::Form;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Response};
use core_explorer::PageRequest;
use core_explorer::query_gate::ensure_select;
use http::StatusCode;
use snafu::ResultExt;

#[tracing::instrument(level = "debug", skip(state), err)]
pub async fn index(State(state): State<AppState>) -> ViewResult<Html<String>> {
    let db_name = state.database_name();
    let tables = state
        .explorer_svc
        .list_tables()
        .await
        .context(ListTablesSnafu { db_name: &db_name })?;
    render_template(&IndexView { db_name, tables })
}

#[tracing::instrument(level = "debug", skip(state), err)]
pub async fn table(
    State(state): State<AppState>,
    Path(table_name): Path<String>,
    Query(parameters): Query<PageParameters>,
) -> ViewResult<Html<String>> {
    let db_name = state.database_name();
    let request = PageRequest::from_param(table_name, parameters.page.as_deref());
    let page = state
        .explorer_svc
        .table_page(request)
        .await
        .context(TableDataSnafu { db_name: &db_name })?;
    render_template(&TableView::new(db_name, page))
}

// `/table/` without a name
pub async fn missing_table_name(State(state): State<AppState>) -> ViewResult<Html<String>> {
    MissingTableNameSnafu {
        db_name: state.database_name(),
    }
    .fail()
}

#[tracing::instrument(level = "debug", skip(state), err)]
pub async fn query_form(
    State(state): State<AppState>,
    Query(parameters): Query<QueryFormParameters>,
) -> ViewResult<Html<String>> {
    render_template(&QueryView::form(state.database_name(), parameters.sql))
}

/// Runs the submitted statement and renders the form again with either the
/// result or an inline error. Rejected statements are not sent to the database.
#[tracing::instrument(level = "debug", skip(state), err)]
pub async fn run_query(
    State(state): State<AppState>,
    Form(parameters): Form<QueryFormParameters>,
) -> ViewResult<Response> {
    let view = QueryView::form(state.database_name(), parameters.sql);
    if view.query.is_empty() {
        return Ok(render_template(&view)?.into_response());
    }

    if let Err(err) = ensure_select(&view.query) {
        let view = view.with_error(err);
        return Ok((StatusCode::FORBIDDEN, render_template(&view)?).into_response());
    }

    match state.explorer_svc.query(&view.query).await {
        Ok(result) => Ok(render_template(&view.with_result(result))?.into_response()),
        Err(err) => {
            tracing::warn!("Query failed: {err}");
            let view = view.with_error(err);
            Ok((StatusCode::INTERNAL_SERVER_ERROR, render_template(&view)?).into_response())
        }
    }
}
