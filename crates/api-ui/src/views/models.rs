use askama::Template;
use core_explorer::{Pagination, ResultSet, TablePage, TableSummary};
use serde::Deserialize;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexView {
    pub db_name: String,
    pub tables: Vec<TableSummary>,
}

#[derive(Template)]
#[template(path = "table.html")]
pub struct TableView {
    pub db_name: String,
    pub table_name: String,
    pub pagination: Pagination,
    pub result: ResultSet,
}

impl TableView {
    #[must_use]
    pub fn new(db_name: String, page: TablePage) -> Self {
        Self {
            db_name,
            table_name: page.table_name,
            pagination: page.pagination,
            result: page.result,
        }
    }
}

/// Query form, optionally followed by an error or the result of a run.
#[derive(Template)]
#[template(path = "query.html")]
pub struct QueryView {
    pub db_name: String,
    pub query: String,
    pub error: Option<String>,
    pub result: Option<ResultSet>,
}

impl QueryView {
    #[must_use]
    pub const fn form(db_name: String, query: String) -> Self {
        Self {
            db_name,
            query,
            error: None,
            result: None,
        }
    }

    #[must_use]
    pub fn with_error(mut self, error: impl ToString) -> Self {
        self.error = Some(error.to_string());
        self
    }

    #[must_use]
    pub fn with_result(mut self, result: ResultSet) -> Self {
        self.result = Some(result);
        self
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorView {
    pub db_name: String,
    pub message: String,
}

// `sql` comes from the query string on GET and from the form body on POST
#[derive(Debug, Default, Deserialize)]
pub struct QueryFormParameters {
    #[serde(default)]
    pub sql: String,
}
