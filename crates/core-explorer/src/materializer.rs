use crate::error::{ExplorerResult, QuerySnafu};
use crate::models::{Cell, ResultSet};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use rusqlite::Connection;
use rusqlite::types::ValueRef;
use snafu::ResultExt;

// Tried in order; a trailing `Z` is stripped before parsing
const ZONED_TIMESTAMP_FORMATS: [&str; 2] =
    ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M:%S%.f%:z"];
const NAIVE_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];
const DATE_FORMAT: &str = "%Y-%m-%d";

// Integers beyond this magnitude in timestamp columns are Unix milliseconds
const UNIX_MILLIS_THRESHOLD: i64 = 1_000_000_000_000;

/// How values of a column are coerced, derived from its declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Plain,
    Timestamp,
    Boolean,
}

impl ColumnKind {
    #[must_use]
    pub fn from_decl_type(decl_type: Option<&str>) -> Self {
        let Some(decl_type) = decl_type else {
            return Self::Plain;
        };
        let base = decl_type
            .split('(')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match base.as_str() {
            "timestamp" | "datetime" | "date" => Self::Timestamp,
            "boolean" => Self::Boolean,
            _ => Self::Plain,
        }
    }
}

impl Cell {
    #[must_use]
    pub fn from_value(value: ValueRef<'_>, kind: ColumnKind) -> Self {
        match (value, kind) {
            (ValueRef::Null, _) => Self::Null,
            (ValueRef::Integer(v), ColumnKind::Boolean) => Self::Bool(v > 0),
            (ValueRef::Integer(v), ColumnKind::Timestamp) => {
                unix_timestamp(v).map_or(Self::Integer(v), Self::Timestamp)
            }
            (ValueRef::Integer(v), _) => Self::Integer(v),
            (ValueRef::Real(v), _) => Self::Real(v),
            (ValueRef::Text(bytes), ColumnKind::Timestamp) => {
                let text = String::from_utf8_lossy(bytes);
                parse_timestamp(&text).map_or_else(|| Self::Text(text.into_owned()), Self::Timestamp)
            }
            (ValueRef::Text(bytes) | ValueRef::Blob(bytes), _) => {
                Self::Text(String::from_utf8_lossy(bytes).into_owned())
            }
        }
    }
}

fn unix_timestamp(value: i64) -> Option<DateTime<FixedOffset>> {
    let ts = if value.unsigned_abs() > UNIX_MILLIS_THRESHOLD.unsigned_abs() {
        DateTime::<Utc>::from_timestamp_millis(value)
    } else {
        DateTime::<Utc>::from_timestamp(value, 0)
    };
    ts.map(|ts| ts.fixed_offset())
}

#[must_use]
pub fn parse_timestamp(text: &str) -> Option<DateTime<FixedOffset>> {
    let text = text.strip_suffix('Z').unwrap_or(text);
    ZONED_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NAIVE_TIMESTAMP_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
                .or_else(|| {
                    NaiveDate::parse_from_str(text, DATE_FORMAT)
                        .ok()
                        .and_then(|date| date.and_hms_opt(0, 0, 0))
                })
                .map(|naive| naive.and_utc().fixed_offset())
        })
}

/// Executes `query` and collects every row. Columns are taken from the
/// prepared statement, so the schema does not need to be known up front.
#[tracing::instrument(level = "debug", skip(conn), err)]
pub fn materialize(conn: &Connection, query: &str) -> ExplorerResult<ResultSet> {
    let mut stmt = conn.prepare(query).context(QuerySnafu { query })?;
    let (columns, kinds): (Vec<String>, Vec<ColumnKind>) = stmt
        .columns()
        .iter()
        .map(|column| {
            (
                column.name().to_string(),
                ColumnKind::from_decl_type(column.decl_type()),
            )
        })
        .unzip();

    let mut result = ResultSet::new(columns);
    let mut rows = stmt.query([]).context(QuerySnafu { query })?;
    while let Some(row) = rows.next().context(QuerySnafu { query })? {
        let mut cells = Vec::with_capacity(kinds.len());
        for (idx, kind) in kinds.iter().enumerate() {
            let value = row.get_ref(idx).context(QuerySnafu { query })?;
            cells.push(Cell::from_value(value, *kind));
        }
        result.push_row(cells);
    }
    tracing::trace!(rows = result.row_count(), "Query materialized");
    Ok(result)
}
