//! Repository for the `activities` table.

use chrono::Utc;

use crate::models::activity::{Activity, CreateActivity};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, active, sub_cat1, sub_cat2, created_at, updated_at";

/// Provides CRUD operations for activities.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Insert a new activity, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateActivity) -> Result<Activity, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO activities (title, active, sub_cat1, sub_cat2, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(&input.title)
            .bind(input.active)
            .bind(&input.sub_cat1)
            .bind(&input.sub_cat2)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// List all activities in insertion order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Activity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activities ORDER BY id ASC");
        sqlx::query_as::<_, Activity>(&query).fetch_all(pool).await
    }
}
