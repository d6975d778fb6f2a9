//! HTTP handlers for account management (owner only)

use axum::{extract::State, http::StatusCode, Json};

use crate::error::AppResult;
use crate::middleware::{require_owner, CurrentUser};
use crate::services::user::{CreateUserInput, User, UserService};
use crate::AppState;

/// All accounts, credentials excluded
pub async fn list_users(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<User>>> {
    require_owner(&current_user.0)?;
    let service = UserService::new(state.db);
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Create a staff or owner account
pub async fn create_user(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<CreateUserInput>,
) -> AppResult<(StatusCode, Json<User>)> {
    require_owner(&current_user.0)?;
    let service = UserService::new(state.db);
    let user = service.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
