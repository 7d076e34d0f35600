#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::router::create_router;
use crate::state::AppState;
use axum::Router;
use axum::body::Body;
use core_explorer::error::ExplorerResult;
use core_explorer::{
    ExplorerService, PageRequest, ResultSet, SqliteExplorerService, TablePage, TableSummary,
};
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use rusqlite::Connection;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::NamedTempFile;
use tower::ServiceExt;

const FIXTURE_SQL: &str = "
    CREATE TABLE users (
        id INTEGER PRIMARY KEY,
        name TEXT,
        created_at DATETIME,
        avatar BLOB
    );
    INSERT INTO users VALUES (1, 'alice', '2024-03-01 12:30:45', X'68656C6C6F');
    INSERT INTO users VALUES (2, NULL, NULL, X'3C623E');
    CREATE TABLE events (id INTEGER PRIMARY KEY, label TEXT NOT NULL);
    WITH RECURSIVE seq(n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM seq WHERE n < 125)
    INSERT INTO events (id, label) SELECT n, 'event-' || n FROM seq;
    CREATE TABLE empty (id INTEGER);
    CREATE TABLE counters (id INTEGER PRIMARY KEY AUTOINCREMENT, v TEXT);
    INSERT INTO counters (v) VALUES ('a');
";

/// Wraps the real explorer and counts the statements sent through `query`.
pub struct CountingExplorer {
    inner: SqliteExplorerService,
    queries: AtomicUsize,
}

impl CountingExplorer {
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ExplorerService for CountingExplorer {
    fn database_name(&self) -> &str {
        self.inner.database_name()
    }

    async fn list_tables(&self) -> ExplorerResult<Vec<TableSummary>> {
        self.inner.list_tables().await
    }

    async fn table_page(&self, request: PageRequest) -> ExplorerResult<TablePage> {
        self.inner.table_page(request).await
    }

    async fn query(&self, query: &str) -> ExplorerResult<ResultSet> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.inner.query(query).await
    }
}

pub struct TestApp {
    pub router: Router,
    pub explorer: Arc<CountingExplorer>,
    // Keeps the database file alive for the duration of the test
    _db: NamedTempFile,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub request_id: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|err| panic!("Invalid JSON body {:?}: {err}", self.body))
    }
}

pub fn test_app() -> TestApp {
    let db = NamedTempFile::new().expect("Failed to create temp file");
    Connection::open(db.path())
        .expect("Failed to open fixture database")
        .execute_batch(FIXTURE_SQL)
        .expect("Failed to populate fixture database");

    let explorer = Arc::new(CountingExplorer {
        inner: SqliteExplorerService::open(db.path()).expect("Failed to open explorer"),
        queries: AtomicUsize::new(0),
    });
    let router = create_router().with_state(AppState::new(explorer.clone()));
    TestApp {
        router,
        explorer,
        _db: db,
    }
}

impl TestApp {
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let header_value = |name: &str| {
            response
                .headers()
                .get(name)
                .map(|value| value.to_str().unwrap().to_string())
        };
        let content_type = header_value(header::CONTENT_TYPE.as_str());
        let request_id = header_value(crate::layers::REQUEST_ID_HEADER);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        TestResponse {
            status,
            content_type,
            request_id,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(
            Request::builder()
                .method(Method::GET)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_form(&self, uri: &str, form: &str) -> TestResponse {
        self.request(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
    }
}
