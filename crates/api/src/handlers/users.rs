//! Handlers for the user endpoints.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tracklog_db::models::user::CreateUser;
use tracklog_db::repositories::UserRepo;
use tracklog_db::schema;

use crate::error::{AppError, AppResult};
use crate::extract::FormOrJson;
use crate::state::AppState;

/// Body of `POST /new`. The field is named `user` on the wire, a contract
/// inherited from the original form front-end.
#[derive(Debug, Deserialize)]
pub struct NewUserBody {
    pub user: String,
}

/// 302 back to the front-end, as the form-driven client expects.
fn redirect_home() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/")])
}

/// GET /users
///
/// List all users. No pagination; duplicates are allowed.
pub async fn list_users(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users))
}

/// POST /new
///
/// Create a user from a form or JSON body `{user: ...}` and redirect to `/`.
pub async fn create_user(
    State(state): State<AppState>,
    FormOrJson(body): FormOrJson<NewUserBody>,
) -> AppResult<impl IntoResponse> {
    let name = body.user.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("'user' must not be empty".into()));
    }

    UserRepo::create(
        &state.pool,
        &CreateUser {
            name: name.to_string(),
        },
    )
    .await?;

    Ok(redirect_home())
}

/// GET /reset
///
/// Destructively reseed users and activities, then redirect to `/`.
/// Activity log entries are untouched.
pub async fn reset(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    tracing::info!("Resetting users and activities to seed state");
    schema::bootstrap(&state.pool).await?;
    Ok(redirect_home())
}
