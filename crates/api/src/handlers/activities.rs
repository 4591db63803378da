//! Handlers for the activity endpoints.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use tracklog_db::repositories::ActivityRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /activities
///
/// List all activities (the five seeded defaults unless the table was
/// modified out of band).
pub async fn list_activities(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let activities = ActivityRepo::list(&state.pool).await?;
    Ok(Json(activities))
}
