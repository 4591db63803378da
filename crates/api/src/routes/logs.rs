//! Route definitions for the activity log endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::logs;
use crate::state::AppState;

/// Activity log routes.
///
/// ```text
/// GET  /log    -> list_logs (all entries)
/// POST /log    -> create_log
/// GET  /logs   -> logs_for_day (?year=&month=&day=, month zero-indexed)
/// POST /logs   -> bulk_create_logs (JSON array)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/log", get(logs::list_logs).post(logs::create_log))
        .route("/logs", get(logs::logs_for_day).post(logs::bulk_create_logs))
}
