//! Activity entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracklog_core::types::{DbId, Timestamp};

/// Full activity row from the `activities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: DbId,
    pub title: String,
    pub active: bool,
    pub sub_cat1: Option<String>,
    pub sub_cat2: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new activity (seeding only -- there is no public
/// create endpoint for activities).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivity {
    pub title: String,
    pub active: bool,
    #[serde(default)]
    pub sub_cat1: Option<String>,
    #[serde(default)]
    pub sub_cat2: Option<String>,
}
