//! HTTP handlers for purchase plans

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::purchasing::{AddPlanInput, Plan, PlanView, PurchasingService};
use crate::AppState;

/// All purchase plans, newest first
pub async fn list_plans(
    State(state): State<AppState>,
    _current_user: CurrentUser,
) -> AppResult<Json<Vec<PlanView>>> {
    let service = PurchasingService::new(state.db);
    let plans = service.list_plans().await?;
    Ok(Json(plans))
}

/// Open a replenishment request
pub async fn add_plan(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Json(input): Json<AddPlanInput>,
) -> AppResult<(StatusCode, Json<Plan>)> {
    let service = PurchasingService::new(state.db);
    let plan = service.add_plan(input).await?;
    Ok((StatusCode::CREATED, Json(plan)))
}

/// Close an open plan
pub async fn complete_plan(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Path(plan_id): Path<Uuid>,
) -> AppResult<Json<Plan>> {
    let service = PurchasingService::new(state.db);
    let plan = service.complete_plan(plan_id).await?;
    Ok(Json(plan))
}
