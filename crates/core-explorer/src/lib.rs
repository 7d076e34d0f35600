pub mod catalog;
pub mod error;
pub mod materializer;
pub mod models;
pub mod pagination;
pub mod query_gate;
pub mod service;

#[cfg(test)]
pub mod tests;

pub use models::{Cell, ResultSet, TablePage, TableSummary};
pub use pagination::{PageRequest, Pagination, ROWS_PER_PAGE};
pub use service::{ExplorerService, SqliteExplorerService};
