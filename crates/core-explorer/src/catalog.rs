use crate::error::{CountRowsSnafu, ExplorerResult, ListTablesSnafu};
use crate::models::TableSummary;
use rusqlite::Connection;
use snafu::ResultExt;

// Names starting with `sqlite_` are SQLite internal tables
const LIST_TABLES_SQL: &str = "SELECT name FROM sqlite_master \
    WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name";

/// Quotes an identifier for interpolation into SQL, doubling embedded quotes.
#[must_use]
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

pub fn table_names(conn: &Connection) -> ExplorerResult<Vec<String>> {
    let mut stmt = conn.prepare(LIST_TABLES_SQL).context(ListTablesSnafu)?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .context(ListTablesSnafu)?
        .collect::<Result<Vec<_>, _>>()
        .context(ListTablesSnafu)?;
    Ok(names)
}

pub fn count_rows(conn: &Connection, table: &str) -> ExplorerResult<i64> {
    let sql = format!("SELECT COUNT(*) FROM {}", quote_identifier(table));
    conn.query_row(&sql, [], |row| row.get::<_, i64>(0))
        .context(CountRowsSnafu { table })
}

/// Lists user tables sorted by name. A table that cannot be counted is still
/// listed, with the sentinel row count.
#[tracing::instrument(level = "debug", skip(conn), err)]
pub fn list_tables(conn: &Connection) -> ExplorerResult<Vec<TableSummary>> {
    let tables = table_names(conn)?
        .into_iter()
        .map(|name| {
            let count = count_rows(conn, &name);
            TableSummary::from_count(name, count)
        })
        .collect();
    Ok(tables)
}
