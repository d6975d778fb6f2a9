//! HTTP handlers for the item catalog

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::{require_owner, CurrentUser};
use crate::services::catalog::{
    CatalogService, CreateItemInput, Item, ItemWithStock, UpdateItemInput,
};
use crate::AppState;

/// Active items with current stock
pub async fn list_items(
    State(state): State<AppState>,
    _current_user: CurrentUser,
) -> AppResult<Json<Vec<ItemWithStock>>> {
    let service = CatalogService::new(state.db);
    let items = service.list_items().await?;
    Ok(Json(items))
}

/// Register a new item (owner only)
pub async fn create_item(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<CreateItemInput>,
) -> AppResult<(StatusCode, Json<Item>)> {
    require_owner(&current_user.0)?;
    let service = CatalogService::new(state.db);
    let item = service.create_item(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Update an item's name, unit, or minimum stock (owner only)
pub async fn update_item(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(item_id): Path<Uuid>,
    Json(input): Json<UpdateItemInput>,
) -> AppResult<Json<Item>> {
    require_owner(&current_user.0)?;
    let service = CatalogService::new(state.db);
    let item = service.update_item(item_id, input).await?;
    Ok(Json(item))
}

/// Soft-delete an item (owner only)
pub async fn delete_item(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(item_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    require_owner(&current_user.0)?;
    let service = CatalogService::new(state.db);
    service.delete_item(item_id).await?;
    Ok(Json(()))
}
