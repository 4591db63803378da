//! Activity log entity model and DTOs.
//!
//! Log timestamps use a single canonical `startDate` / `endDate` pair of
//! RFC 3339 UTC instants. `activity` is free-form text with no referential
//! link to `activities.title`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracklog_core::types::{DbId, Timestamp};

/// Full activity log row from the `activity_log` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: DbId,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    pub magnitude_sec: Option<i64>,
    pub activity: Option<String>,
    pub sub_cat1: Option<String>,
    pub sub_cat2: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new activity log entry.
///
/// Batch-friendly: everything but `start_date` is optional so bulk imports
/// can carry sparse rows.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityLog {
    pub start_date: Timestamp,
    #[serde(default)]
    pub end_date: Option<Timestamp>,
    #[serde(default)]
    pub magnitude_sec: Option<i64>,
    #[serde(default)]
    pub activity: Option<String>,
    #[serde(default)]
    pub sub_cat1: Option<String>,
    #[serde(default)]
    pub sub_cat2: Option<String>,
}
