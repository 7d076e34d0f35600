use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, InterruptHandle, OpenFlags};
use snafu::ResultExt;

use super::catalog::{self, quote_identifier};
use super::error::{
    self as ex_error, ExplorerError, ExplorerResult, OpenDatabaseSnafu, TaskJoinSnafu,
};
use super::materializer::materialize;
use super::models::{ResultSet, TablePage, TableSummary};
use super::pagination::{PageRequest, Pagination};

#[async_trait::async_trait]
pub trait ExplorerService: Send + Sync {
    /// Display name of the database, the base name of its file.
    fn database_name(&self) -> &str;
    async fn list_tables(&self) -> ExplorerResult<Vec<TableSummary>>;
    async fn table_page(&self, request: PageRequest) -> ExplorerResult<TablePage>;
    async fn query(&self, query: &str) -> ExplorerResult<ResultSet>;
}

/// Explorer over a single SQLite file opened read-only.
///
/// The connection is shared behind a mutex and every call runs on the blocking
/// thread pool. A call whose future is dropped (request timeout, client gone)
/// interrupts its statement, so the connection is handed back to the next
/// caller instead of staying busy with work nobody waits for.
#[derive(Clone)]
pub struct SqliteExplorerService {
    conn: Arc<Mutex<Connection>>,
    interrupt: Arc<InterruptHandle>,
    name: String,
}

impl std::fmt::Debug for SqliteExplorerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteExplorerService")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl SqliteExplorerService {
    pub fn open(path: impl AsRef<Path>) -> ExplorerResult<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return ex_error::DatabaseNotFoundSnafu { path }.fail();
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .context(OpenDatabaseSnafu { path })?;
        // Opening is lazy, reading the schema proves the file is a database
        conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
            row.get::<_, i64>(0)
        })
        .context(ex_error::ConnectSnafu { path })?;

        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
        tracing::debug!(path = %path.display(), "Opened database read-only");
        Ok(Self {
            interrupt: Arc::new(conn.get_interrupt_handle()),
            conn: Arc::new(Mutex::new(conn)),
            name,
        })
    }

    async fn with_connection<T, F>(&self, f: F) -> ExplorerResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> ExplorerResult<T> + Send + 'static,
    {
        let conn = self.conn.clone();
        let guard = InterruptOnDrop {
            interrupt: self.interrupt.clone(),
            state: Arc::new(Mutex::new(CallState::Queued)),
        };
        let state = guard.state.clone();
        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(|_| ExplorerError::ConnectionPoisoned)?;
            {
                let mut state = state.lock().map_err(|_| ExplorerError::ConnectionPoisoned)?;
                if *state == CallState::Abandoned {
                    return ex_error::AbandonedSnafu.fail();
                }
                *state = CallState::Running;
            }
            let result = f(&conn);
            // Cleared before the connection lock is released, so a late
            // interrupt can never hit the next caller's statement
            if let Ok(mut state) = state.lock() {
                *state = CallState::Finished;
            }
            result
        })
        .await
        .context(TaskJoinSnafu)?
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CallState {
    Queued,
    Running,
    Finished,
    Abandoned,
}

// Lives in the caller's future. Dropping it before the blocking call is done
// either skips the call or interrupts the running statement.
struct InterruptOnDrop {
    interrupt: Arc<InterruptHandle>,
    state: Arc<Mutex<CallState>>,
}

impl Drop for InterruptOnDrop {
    fn drop(&mut self) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };
        match *state {
            CallState::Queued => *state = CallState::Abandoned,
            CallState::Running => {
                tracing::debug!("Interrupting abandoned database call");
                self.interrupt.interrupt();
                *state = CallState::Abandoned;
            }
            CallState::Finished | CallState::Abandoned => {}
        }
    }
}

#[async_trait::async_trait]
impl ExplorerService for SqliteExplorerService {
    fn database_name(&self) -> &str {
        &self.name
    }

    #[tracing::instrument(name = "ExplorerService::list_tables", level = "debug", skip(self), err)]
    async fn list_tables(&self) -> ExplorerResult<Vec<TableSummary>> {
        self.with_connection(catalog::list_tables).await
    }

    #[tracing::instrument(name = "ExplorerService::table_page", level = "debug", skip(self), err)]
    async fn table_page(&self, request: PageRequest) -> ExplorerResult<TablePage> {
        self.with_connection(move |conn| {
            let total_rows = catalog::count_rows(conn, &request.table_name)?;
            let pagination = Pagination::new(&request, total_rows);
            let sql = format!(
                "SELECT * FROM {} LIMIT {} OFFSET {}",
                quote_identifier(&request.table_name),
                pagination.limit,
                pagination.offset
            );
            let result = materialize(conn, &sql)?;
            Ok(TablePage {
                table_name: request.table_name,
                pagination,
                result,
            })
        })
        .await
    }

    #[tracing::instrument(name = "ExplorerService::query", level = "debug", skip(self), err)]
    async fn query(&self, query: &str) -> ExplorerResult<ResultSet> {
        let query = query.to_string();
        self.with_connection(move |conn| materialize(conn, &query))
            .await
    }
}
