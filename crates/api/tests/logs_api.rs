//! HTTP-level integration tests for the activity log endpoints.
//!
//! Covers single and bulk creation, the unfiltered listing, the calendar-day
//! filter (zero-indexed month, half-open range), parameter validation, and
//! log survival across `/reset`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::SqlitePool;

fn log_entry(start: &str, activity: &str) -> serde_json::Value {
    serde_json::json!({
        "startDate": start,
        "magnitudeSec": 600,
        "activity": activity,
    })
}

#[sqlx::test]
async fn create_log_returns_created_row(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let body = serde_json::json!({
        "startDate": "2023-06-10T09:00:00Z",
        "endDate": "2023-06-10T09:45:00Z",
        "magnitudeSec": 2700,
        "activity": "Code Reviews",
        "subCat1": "backend",
    });
    let response = post_json(app.clone(), "/log", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let row = body_json(response).await;
    assert!(row["id"].is_number());
    assert_eq!(row["magnitudeSec"], 2700);
    assert_eq!(row["activity"], "Code Reviews");
    assert_eq!(row["subCat1"], "backend");
    assert!(row["subCat2"].is_null());
    assert!(row["createdAt"].is_string());
    assert!(row["updatedAt"].is_string());

    let listing = body_json(get(app, "/log").await).await;
    assert_eq!(listing.as_array().unwrap().len(), 1);
}

#[sqlx::test]
async fn create_log_without_start_date_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let response = post_json(app, "/log", serde_json::json!({ "activity": "Email" })).await;
    assert!(response.status().is_client_error());
}

#[sqlx::test]
async fn bulk_create_increases_count_by_k(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let batch = serde_json::json!([
        log_entry("2023-06-10T08:00:00Z", "JIRA"),
        log_entry("2023-06-10T09:00:00Z", "Email"),
        log_entry("2023-06-10T10:00:00Z", "Learning"),
    ]);
    let response = post_json(app.clone(), "/logs", batch).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 3);

    let listing = body_json(get(app, "/log").await).await;
    assert_eq!(listing.as_array().unwrap().len(), 3);
}

#[sqlx::test]
async fn day_filter_uses_half_open_range_with_zero_indexed_month(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    // month=5 is June. The window is [2023-06-10T00:00Z, 2023-06-11T00:00Z).
    let batch = serde_json::json!([
        log_entry("2023-06-09T23:59:59Z", "before"),
        log_entry("2023-06-10T00:00:00Z", "at-start"),
        log_entry("2023-06-10T12:30:00Z", "midday"),
        log_entry("2023-06-10T23:59:59Z", "last-second"),
        log_entry("2023-06-11T00:00:00Z", "at-end"),
    ]);
    post_json(app.clone(), "/logs", batch).await;

    let response = get(app, "/logs?year=2023&month=5&day=10").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["activity"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["at-start", "midday", "last-second"]);
}

#[sqlx::test]
async fn day_filter_rejects_malformed_parameters(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    // Non-numeric month.
    let response = get(app.clone(), "/logs?year=2023&month=June&day=10").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Missing day.
    let response = get(app.clone(), "/logs?year=2023&month=5").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Month out of the zero-indexed range.
    let response = get(app.clone(), "/logs?year=2023&month=12&day=10").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Not a real calendar date (April has 30 days; month=3 is April).
    let response = get(app, "/logs?year=2023&month=3&day=31").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn logs_survive_reset(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    post_json(app.clone(), "/log", log_entry("2023-06-10T09:00:00Z", "Email")).await;

    let response = get(app.clone(), "/reset").await;
    assert_eq!(response.status(), StatusCode::FOUND);

    let listing = body_json(get(app, "/log").await).await;
    assert_eq!(listing.as_array().unwrap().len(), 1);
}
