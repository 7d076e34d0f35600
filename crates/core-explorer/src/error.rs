use std::path::PathBuf;

use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ExplorerError {
    #[snafu(display("database file not found at path: {}", path.display()))]
    DatabaseNotFound { path: PathBuf },

    #[snafu(display("failed to open database {}: {source}", path.display()))]
    OpenDatabase {
        path: PathBuf,
        source: rusqlite::Error,
    },

    #[snafu(display("failed to connect to database {}: {source}", path.display()))]
    Connect {
        path: PathBuf,
        source: rusqlite::Error,
    },

    #[snafu(display("failed to list tables: {source}"))]
    ListTables { source: rusqlite::Error },

    #[snafu(display("failed to count rows of table {table}: {source}"))]
    CountRows {
        table: String,
        source: rusqlite::Error,
    },

    // Display is the bare database message, it is shown to users as is
    #[snafu(display("{source}"))]
    Query {
        query: String,
        source: rusqlite::Error,
    },

    #[snafu(display("Only SELECT queries are allowed."))]
    SelectOnly { query: String },

    #[snafu(display("database connection lock poisoned"))]
    ConnectionPoisoned,

    #[snafu(display("database call abandoned by its caller"))]
    Abandoned,

    #[snafu(display("blocking database task failed: {source}"))]
    TaskJoin { source: tokio::task::JoinError },
}

pub type ExplorerResult<T> = std::result::Result<T, ExplorerError>;
