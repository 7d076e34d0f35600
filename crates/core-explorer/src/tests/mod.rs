#![allow(clippy::unwrap_used, clippy::expect_used)]


use rusqlite::Connection;
use tempfile::NamedTempFile;

pub const EVENT_ROWS: i64 = 125;

const FIXTURE_SQL: &str = "
    CREATE TABLE users (
        id INTEGER PRIMARY KEY,
        name TEXT,
        active BOOLEAN,
        created_at DATETIME,
        avatar BLOB,
        score REAL
    );
    INSERT INTO users VALUES (1, 'alice', 1, '2024-03-01 12:30:45', X'68656C6C6F', 9.5);
    INSERT INTO users VALUES (2, NULL, 0, 1700000000, NULL, NULL);
    CREATE TABLE events (id INTEGER PRIMARY KEY, label TEXT NOT NULL);
    WITH RECURSIVE seq(n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM seq WHERE n < 125)
    INSERT INTO events (id, label) SELECT n, 'event-' || n FROM seq;
    CREATE TABLE empty (id INTEGER);
    CREATE TABLE counters (id INTEGER PRIMARY KEY AUTOINCREMENT, v TEXT);
    INSERT INTO counters (v) VALUES ('a');
    CREATE TABLE \"odd \"\"name\"\"\" (x TEXT);
    INSERT INTO \"odd \"\"name\"\"\" VALUES ('quoted');
    CREATE INDEX users_name ON users(name);
    CREATE VIEW active_users AS SELECT * FROM users WHERE active;
";

/// Temporary database file populated with the fixture tables.
/// The file is removed when the value is dropped.
pub fn fixture_db() -> NamedTempFile {
    let file = NamedTempFile::new().expect("Failed to create temp file");
    let conn = Connection::open(file.path()).expect("Failed to open fixture database");
    conn.execute_batch(FIXTURE_SQL)
        .expect("Failed to populate fixture database");
    file
}
