use core_explorer::{Cell, TablePage, TableSummary};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub name: String,
    /// `-1` when the table could not be counted
    pub row_count: i64,
    #[serde(rename = "viewURL")]
    pub view_url: String,
    #[serde(rename = "apiDataURL")]
    pub api_data_url: String,
}

impl From<TableSummary> for Table {
    fn from(summary: TableSummary) -> Self {
        Self {
            name: summary.name,
            row_count: summary.row_count,
            view_url: summary.view_url,
            api_data_url: summary.api_data_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableDataResponse {
    pub table_name: String,
    pub page: i64,
    pub rows_per_page: i64,
    pub total_rows: i64,
    pub columns: Vec<String>,
    #[schema(value_type = Vec<Vec<Object>>)]
    pub rows: Vec<Vec<Cell>>,
}

impl From<TablePage> for TableDataResponse {
    fn from(page: TablePage) -> Self {
        Self {
            table_name: page.table_name,
            page: page.pagination.current_page,
            rows_per_page: page.pagination.limit,
            total_rows: page.pagination.total_rows,
            columns: page.result.columns,
            rows: page.result.rows,
        }
    }
}
