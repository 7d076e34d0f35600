use crate::error::ExplorerResult;
use crate::pagination::Pagination;
use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Serialize, Serializer};
use std::fmt::{self, Display};

/// Row count recorded for a table whose `COUNT(*)` failed.
pub const UNCOUNTABLE_ROWS: i64 = -1;

/// Text a SQL `NULL` is rendered as, both in HTML and in JSON.
pub const NULL_TEXT: &str = "NULL";

/// A single value of a result row, after coercion for display and serialization.
///
/// `Null` is kept as its own variant so callers can tell it apart from the
/// string `"NULL"`, but it is rendered as that exact text on every output.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Integer(i64),
    Real(f64),
    Bool(bool),
    Timestamp(DateTime<FixedOffset>),
    Null,
}

impl Cell {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    fn timestamp_text(ts: &DateTime<FixedOffset>) -> String {
        ts.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Real(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Timestamp(value) => f.write_str(&Self::timestamp_text(value)),
            Self::Null => f.write_str(NULL_TEXT),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(value) => serializer.serialize_str(value),
            Self::Integer(value) => serializer.serialize_i64(*value),
            Self::Real(value) => serializer.serialize_f64(*value),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Timestamp(value) => serializer.serialize_str(&Self::timestamp_text(value)),
            Self::Null => serializer.serialize_str(NULL_TEXT),
        }
    }
}

/// Columns and rows of an executed statement.
///
/// Every row holds exactly `columns.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl ResultSet {
    #[must_use]
    pub const fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    pub name: String,
    pub row_count: i64,
    pub view_url: String,
    pub api_data_url: String,
}

impl TableSummary {
    #[must_use]
    pub fn new(name: String, row_count: i64) -> Self {
        Self {
            view_url: format!("/table/{name}"),
            api_data_url: format!("/api/table/{name}"),
            name,
            row_count,
        }
    }

    /// Builds a summary from the outcome of counting the table rows.
    /// A failed count is logged and degrades to [`UNCOUNTABLE_ROWS`].
    #[must_use]
    pub fn from_count(name: String, count: ExplorerResult<i64>) -> Self {
        match count {
            Ok(row_count) => Self::new(name, row_count),
            Err(err) => {
                tracing::warn!(table = %name, "Could not count rows: {err}");
                Self::new(name, UNCOUNTABLE_ROWS)
            }
        }
    }

    #[must_use]
    pub const fn is_countable(&self) -> bool {
        self.row_count >= 0
    }
}

/// One page of a table, with the bounds used to fetch it.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePage {
    pub table_name: String,
    pub pagination: Pagination,
    pub result: ResultSet,
}
