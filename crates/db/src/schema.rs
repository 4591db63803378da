//! Table definitions and default-data seeding.
//!
//! The service (re)initializes its tables at startup and on `GET /reset`:
//! `users` and `activities` are dropped, recreated, and reseeded;
//! `activity_log` is only created if missing, so log entries survive a
//! reset. Seed data are immutable constants rather than mutable process
//! state.

use crate::models::activity::CreateActivity;
use crate::models::user::CreateUser;
use crate::repositories::{ActivityRepo, UserRepo};
use crate::DbPool;

/// Users inserted into a freshly reset `users` table. Only the first entry
/// is seeded, matching the historical behaviour the front-end expects.
pub const DEFAULT_USERS: &[&str] = &["Carly"];

/// Activities inserted into a freshly reset `activities` table, all active.
pub const DEFAULT_ACTIVITIES: &[&str] =
    &["JIRA", "Email", "Code Reviews", "Writing Code", "Learning"];

const CREATE_USERS: &str = "\
    CREATE TABLE users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )";

const CREATE_ACTIVITIES: &str = "\
    CREATE TABLE activities (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        active INTEGER NOT NULL,
        sub_cat1 TEXT,
        sub_cat2 TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )";

// `activity` is free-form text, deliberately NOT a foreign key into
// `activities.title`.
const CREATE_ACTIVITY_LOG: &str = "\
    CREATE TABLE IF NOT EXISTS activity_log (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        start_date TEXT NOT NULL,
        end_date TEXT,
        magnitude_sec INTEGER,
        activity TEXT,
        sub_cat1 TEXT,
        sub_cat2 TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )";

/// Drop and reseed `users` and `activities`; ensure `activity_log` exists.
///
/// Runs at startup and on every `/reset`. Destructive for users and
/// activities by design.
pub async fn bootstrap(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("DROP TABLE IF EXISTS users").execute(pool).await?;
    sqlx::query(CREATE_USERS).execute(pool).await?;
    UserRepo::create(
        pool,
        &CreateUser {
            name: DEFAULT_USERS[0].to_string(),
        },
    )
    .await?;

    sqlx::query("DROP TABLE IF EXISTS activities").execute(pool).await?;
    sqlx::query(CREATE_ACTIVITIES).execute(pool).await?;
    for title in DEFAULT_ACTIVITIES {
        ActivityRepo::create(
            pool,
            &CreateActivity {
                title: title.to_string(),
                active: true,
                sub_cat1: None,
                sub_cat2: None,
            },
        )
        .await?;
    }

    sqlx::query(CREATE_ACTIVITY_LOG).execute(pool).await?;

    tracing::info!(
        activities = DEFAULT_ACTIVITIES.len(),
        "Database tables reset and seeded"
    );
    Ok(())
}
