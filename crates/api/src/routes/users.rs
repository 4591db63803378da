//! Route definitions for the user endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// User routes. `/new` and `/reset` answer with a redirect to `/` rather
/// than the affected rows, matching the form-driven front-end.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/new", post(users::create_user))
        .route("/reset", get(users::reset))
}
