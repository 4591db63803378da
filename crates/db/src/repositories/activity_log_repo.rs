//! Repository for the `activity_log` table.

use chrono::Utc;
use tracklog_core::types::Timestamp;

use crate::models::activity_log::{ActivityLog, CreateActivityLog};
use crate::DbPool;

/// Column list for SELECT queries.
const COLUMNS: &str = "\
    id, start_date, end_date, magnitude_sec, activity, \
    sub_cat1, sub_cat2, created_at, updated_at";

/// Column list for INSERT (excludes auto-generated `id`).
const INSERT_COLUMNS: &str = "\
    start_date, end_date, magnitude_sec, activity, \
    sub_cat1, sub_cat2, created_at, updated_at";

/// Bind parameters per inserted row, matching `INSERT_COLUMNS`.
const INSERT_PARAMS: usize = 8;

/// Provides insert and query operations for activity log entries.
pub struct ActivityLogRepo;

impl ActivityLogRepo {
    /// Insert a single log entry, returning the created row.
    pub async fn create(
        pool: &DbPool,
        input: &CreateActivityLog,
    ) -> Result<ActivityLog, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO activity_log ({INSERT_COLUMNS})
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ActivityLog>(&query)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.magnitude_sec)
            .bind(&input.activity)
            .bind(&input.sub_cat1)
            .bind(&input.sub_cat2)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Batch insert multiple log entries, returning the created rows.
    ///
    /// Uses a single INSERT with multiple value rows for efficiency.
    pub async fn batch_insert(
        pool: &DbPool,
        entries: &[CreateActivityLog],
    ) -> Result<Vec<ActivityLog>, sqlx::Error> {
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now();

        // Build a multi-row INSERT statement.
        let row = format!("({})", vec!["?"; INSERT_PARAMS].join(", "));
        let rows = vec![row; entries.len()].join(", ");
        let query = format!(
            "INSERT INTO activity_log ({INSERT_COLUMNS}) VALUES {rows} RETURNING {COLUMNS}"
        );

        let mut q = sqlx::query_as::<_, ActivityLog>(&query);
        for entry in entries {
            q = q
                .bind(entry.start_date)
                .bind(entry.end_date)
                .bind(entry.magnitude_sec)
                .bind(&entry.activity)
                .bind(&entry.sub_cat1)
                .bind(&entry.sub_cat2)
                .bind(now)
                .bind(now);
        }

        q.fetch_all(pool).await
    }

    /// List all log entries ordered by start time.
    pub async fn list(pool: &DbPool) -> Result<Vec<ActivityLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activity_log ORDER BY start_date ASC, id ASC");
        sqlx::query_as::<_, ActivityLog>(&query).fetch_all(pool).await
    }

    /// List log entries whose start time falls in the half-open range
    /// `[from, to)`.
    pub async fn find_in_range(
        pool: &DbPool,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<Vec<ActivityLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activity_log
             WHERE start_date >= ? AND start_date < ?
             ORDER BY start_date ASC, id ASC"
        );
        sqlx::query_as::<_, ActivityLog>(&query)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }
}
