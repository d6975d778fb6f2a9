//! Authentication handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::error::AppResult;
use crate::services::auth::{AuthTokens, SetupResponse};
use crate::services::AuthService;
use crate::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Deserialize)]
pub struct SetupRequest {
    pub name: String,
    pub password: String,
}

/// Login endpoint handler
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<AuthTokens>> {
    let auth_service = AuthService::new(state.db.clone(), &state.config);
    let tokens = auth_service.login(&body.name, &body.password).await?;
    Ok(Json(tokens))
}

/// Token refresh endpoint handler
pub async fn refresh(
    State(state): State<AppState>,
    Json(body): Json<RefreshRequest>,
) -> AppResult<Json<AuthTokens>> {
    let auth_service = AuthService::new(state.db.clone(), &state.config);
    let tokens = auth_service.refresh(&body.refresh_token).await?;
    Ok(Json(tokens))
}

/// First-run setup: create the initial owner account
pub async fn setup(
    State(state): State<AppState>,
    Json(body): Json<SetupRequest>,
) -> AppResult<(StatusCode, Json<SetupResponse>)> {
    let auth_service = AuthService::new(state.db.clone(), &state.config);
    let result = auth_service.setup_owner(&body.name, &body.password).await?;
    Ok((StatusCode::CREATED, Json(result)))
}
