#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::tests::common::test_app;
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_ui_tables_list() {
    let app = test_app();
    let res = app.get("/api/tables").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.content_type.as_deref(), Some("application/json"));
    assert_eq!(
        res.json(),
        json!([
            {"name": "counters", "rowCount": 1, "viewURL": "/table/counters", "apiDataURL": "/api/table/counters"},
            {"name": "empty", "rowCount": 0, "viewURL": "/table/empty", "apiDataURL": "/api/table/empty"},
            {"name": "events", "rowCount": 125, "viewURL": "/table/events", "apiDataURL": "/api/table/events"},
            {"name": "users", "rowCount": 2, "viewURL": "/table/users", "apiDataURL": "/api/table/users"},
        ])
    );
}

#[tokio::test]
async fn test_ui_table_data_pages() {
    let app = test_app();

    let res = app.get("/api/table/events").await;
    assert_eq!(res.status, StatusCode::OK);
    let body = res.json();
    assert_eq!(body["tableName"], "events");
    assert_eq!(body["page"], 1);
    assert_eq!(body["rowsPerPage"], 50);
    assert_eq!(body["totalRows"], 125);
    assert_eq!(body["columns"], json!(["id", "label"]));
    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 50);
    assert_eq!(rows[0], json!([1, "event-1"]));

    let body = app.get("/api/table/events?page=3").await.json();
    assert_eq!(body["page"], 3);
    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 25);
    assert_eq!(rows[0], json!([101, "event-101"]));

    // Past the end is an empty page, not an error
    let res = app.get("/api/table/events?page=4").await;
    assert_eq!(res.status, StatusCode::OK);
    let body = res.json();
    assert_eq!(body["page"], 4);
    assert_eq!(body["rows"], json!([]));
    assert_eq!(body["columns"], json!(["id", "label"]));
}

#[tokio::test]
async fn test_ui_table_data_bad_page_is_first_page() {
    let app = test_app();
    for uri in [
        "/api/table/events?page=abc",
        "/api/table/events?page=0",
        "/api/table/events?page=-2",
        "/api/table/events?page=",
    ] {
        let res = app.get(uri).await;
        assert_eq!(res.status, StatusCode::OK, "{uri}");
        let body = res.json();
        assert_eq!(body["page"], 1, "{uri}");
        assert_eq!(body["rows"][0], json!([1, "event-1"]), "{uri}");
    }
}

#[tokio::test]
async fn test_ui_table_data_empty_table() {
    let app = test_app();
    let body = app.get("/api/table/empty").await.json();
    assert_eq!(body["totalRows"], 0);
    assert_eq!(body["columns"], json!(["id"]));
    assert_eq!(body["rows"], json!([]));
}

#[tokio::test]
async fn test_ui_table_data_cells() {
    let app = test_app();
    let body = app.get("/api/table/users").await.json();
    assert_eq!(body["columns"], json!(["id", "name", "created_at", "avatar"]));
    assert_eq!(
        body["rows"],
        json!([
            [1, "alice", "2024-03-01T12:30:45Z", "hello"],
            [2, "NULL", "NULL", "<b>"],
        ])
    );
}

#[tokio::test]
async fn test_ui_table_data_unknown_table() {
    let app = test_app();
    let res = app.get("/api/table/missing").await;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.json(), json!({"error": "Failed to get table data"}));
}

#[tokio::test]
async fn test_ui_table_data_without_name() {
    let app = test_app();
    let res = app.get("/api/table/").await;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.json(), json!({"error": "Failed to get table data"}));
}
