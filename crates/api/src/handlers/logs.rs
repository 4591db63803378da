//! Handlers for the activity log endpoints.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tracklog_core::timespan::day_span;
use tracklog_db::models::activity_log::CreateActivityLog;
use tracklog_db::repositories::ActivityLogRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for `GET /logs`. `month` is zero-indexed (0 = January),
/// preserving the front-end contract. Missing or non-numeric values are
/// rejected by the extractor with a 400.
#[derive(Debug, Deserialize)]
pub struct DayParams {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// GET /log
///
/// List all log entries, unfiltered.
pub async fn list_logs(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let logs = ActivityLogRepo::list(&state.pool).await?;
    Ok(Json(logs))
}

/// POST /log
///
/// Create one log entry, returning the created row.
pub async fn create_log(
    State(state): State<AppState>,
    Json(input): Json<CreateActivityLog>,
) -> AppResult<impl IntoResponse> {
    tracing::debug!(activity = ?input.activity, start = %input.start_date, "Creating log entry");
    let row = ActivityLogRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /logs?year=&month=&day=
///
/// List log entries whose start time falls within the given calendar day,
/// interpreted at the configured UTC offset as a half-open range
/// `[day_start, next_day_start)`.
pub async fn logs_for_day(
    State(state): State<AppState>,
    Query(params): Query<DayParams>,
) -> AppResult<impl IntoResponse> {
    let (from, to) = day_span(
        params.year,
        params.month,
        params.day,
        state.config.log_utc_offset_minutes,
    )?;

    let logs = ActivityLogRepo::find_in_range(&state.pool, from, to).await?;
    Ok(Json(logs))
}

/// POST /logs
///
/// Bulk-create log entries from a JSON array, in a single insert.
pub async fn bulk_create_logs(
    State(state): State<AppState>,
    Json(inputs): Json<Vec<CreateActivityLog>>,
) -> AppResult<impl IntoResponse> {
    tracing::debug!(count = inputs.len(), "Bulk-creating log entries");
    let rows = ActivityLogRepo::batch_insert(&state.pool, &inputs).await?;
    Ok((StatusCode::CREATED, Json(rows)))
}
