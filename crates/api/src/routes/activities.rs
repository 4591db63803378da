//! Route definitions for the activity endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::activities;
use crate::state::AppState;

/// Activity routes. Read-only: activities change only via `/reset` reseeding.
pub fn router() -> Router<AppState> {
    Router::new().route("/activities", get(activities::list_activities))
}
