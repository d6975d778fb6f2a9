//! HTTP handlers for inventory endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use shared::types::Pagination;
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::inventory::{
    InventoryService, ItemStock, LowStockEntry, Movement, MovementView, RecordMovementInput,
};
use crate::AppState;

/// Record a stock movement (in, out, or waste via note)
pub async fn record_movement(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<RecordMovementInput>,
) -> AppResult<(StatusCode, Json<Movement>)> {
    let service = InventoryService::new(state.db);
    let movement = service
        .record_movement(current_user.0.user_id, input)
        .await?;
    Ok((StatusCode::CREATED, Json(movement)))
}

/// Movement history, newest first
pub async fn list_movements(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<Vec<MovementView>>> {
    let service = InventoryService::new(state.db);
    let movements = service.list_movements(pagination).await?;
    Ok(Json(movements))
}

/// Current quantity for one item
pub async fn get_stock(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Path(item_id): Path<Uuid>,
) -> AppResult<Json<StockResponse>> {
    let service = InventoryService::new(state.db);
    let quantity = service.get_stock(item_id).await?;
    Ok(Json(StockResponse { item_id, quantity }))
}

/// Current stock for every active item
pub async fn stock_overview(
    State(state): State<AppState>,
    _current_user: CurrentUser,
) -> AppResult<Json<Vec<ItemStock>>> {
    let service = InventoryService::new(state.db);
    let overview = service.stock_overview().await?;
    Ok(Json(overview))
}

/// Items below their minimum, largest deficit first
pub async fn low_stock(
    State(state): State<AppState>,
    _current_user: CurrentUser,
) -> AppResult<Json<Vec<LowStockEntry>>> {
    let service = InventoryService::new(state.db);
    let entries = service.low_stock().await?;
    Ok(Json(entries))
}

/// Response for a single-item stock read
#[derive(Debug, Serialize)]
pub struct StockResponse {
    pub item_id: Uuid,
    pub quantity: i64,
}
