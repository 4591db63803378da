//! Integration tests for schema bootstrap and seeding semantics.
//!
//! - Fresh bootstrap seeds one user and five active activities.
//! - Re-running bootstrap wipes users/activities back to seed state.
//! - `activity_log` is created non-destructively: entries survive a reset.

use chrono::{TimeZone, Utc};
use sqlx::SqlitePool;
use tracklog_db::models::activity_log::CreateActivityLog;
use tracklog_db::models::user::CreateUser;
use tracklog_db::repositories::{ActivityLogRepo, ActivityRepo, UserRepo};
use tracklog_db::schema::{self, DEFAULT_ACTIVITIES, DEFAULT_USERS};

fn sample_log() -> CreateActivityLog {
    CreateActivityLog {
        start_date: Utc.with_ymd_and_hms(2023, 6, 10, 9, 30, 0).unwrap(),
        end_date: Some(Utc.with_ymd_and_hms(2023, 6, 10, 10, 0, 0).unwrap()),
        magnitude_sec: Some(1800),
        activity: Some("Email".to_string()),
        sub_cat1: None,
        sub_cat2: None,
    }
}

#[sqlx::test]
async fn bootstrap_seeds_default_user_and_activities(pool: SqlitePool) {
    schema::bootstrap(&pool).await.expect("bootstrap should succeed");

    let users = UserRepo::list(&pool).await.expect("list users");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, DEFAULT_USERS[0]);

    let activities = ActivityRepo::list(&pool).await.expect("list activities");
    let titles: Vec<&str> = activities.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, DEFAULT_ACTIVITIES);
    assert!(activities.iter().all(|a| a.active));

    let logs = ActivityLogRepo::list(&pool).await.expect("list logs");
    assert!(logs.is_empty());
}

#[sqlx::test]
async fn rebootstrap_resets_users_and_activities(pool: SqlitePool) {
    schema::bootstrap(&pool).await.expect("first bootstrap");

    UserRepo::create(
        &pool,
        &CreateUser {
            name: "Alice".to_string(),
        },
    )
    .await
    .expect("create user");
    assert_eq!(UserRepo::list(&pool).await.unwrap().len(), 2);

    schema::bootstrap(&pool).await.expect("second bootstrap");

    let users = UserRepo::list(&pool).await.expect("list users");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, DEFAULT_USERS[0]);
    assert_eq!(
        ActivityRepo::list(&pool).await.unwrap().len(),
        DEFAULT_ACTIVITIES.len()
    );
}

#[sqlx::test]
async fn log_entries_survive_rebootstrap(pool: SqlitePool) {
    schema::bootstrap(&pool).await.expect("first bootstrap");

    ActivityLogRepo::create(&pool, &sample_log())
        .await
        .expect("create log entry");

    schema::bootstrap(&pool).await.expect("second bootstrap");

    let logs = ActivityLogRepo::list(&pool).await.expect("list logs");
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].activity.as_deref(), Some("Email"));
}

#[sqlx::test]
async fn duplicate_user_names_are_allowed(pool: SqlitePool) {
    schema::bootstrap(&pool).await.expect("bootstrap");

    for _ in 0..3 {
        UserRepo::create(
            &pool,
            &CreateUser {
                name: "Alice".to_string(),
            },
        )
        .await
        .expect("create user");
    }

    let users = UserRepo::list(&pool).await.expect("list users");
    assert_eq!(users.len(), 4);
    assert_eq!(users.iter().filter(|u| u.name == "Alice").count(), 3);
}
