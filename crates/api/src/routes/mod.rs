pub mod activities;
pub mod health;
pub mod logs;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the legacy front-end route tree (mounted at the root).
///
/// ```text
/// GET  /users       list users
/// POST /new         create user (form or JSON), 302 -> /
/// GET  /reset       destructive reseed, 302 -> /
///
/// GET  /activities  list activities
///
/// GET  /log         list all log entries
/// POST /log         create one log entry
/// GET  /logs        list entries for one calendar day
/// POST /logs        bulk-create log entries
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(users::router())
        .merge(activities::router())
        .merge(logs::router())
}
