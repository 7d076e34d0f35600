use core_explorer::{Cell, ResultSet};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QueryParameters {
    /// SELECT statement to run
    pub sql: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    pub query: String,
    pub columns: Vec<String>,
    #[schema(value_type = Vec<Vec<Object>>)]
    pub rows: Vec<Vec<Cell>>,
}

impl QueryResponse {
    #[must_use]
    pub fn new(query: String, result: ResultSet) -> Self {
        Self {
            query,
            columns: result.columns,
            rows: result.rows,
        }
    }
}
