//! Item catalog service
//!
//! Items are never physically deleted, only flagged. Creating an item also
//! seeds its projection row at zero so later movements always have a row to
//! increment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shared::validation::{validate_min_stock, validate_name, validate_unit};

use crate::error::{AppError, AppResult};

/// Catalog service for managing stock items
#[derive(Clone)]
pub struct CatalogService {
    db: PgPool,
}

/// A stock item
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub unit: String,
    pub min_stock: i64,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An item with its current quantity
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ItemWithStock {
    pub id: Uuid,
    pub name: String,
    pub unit: String,
    pub min_stock: i64,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
}

/// Input for registering an item
#[derive(Debug, Deserialize)]
pub struct CreateItemInput {
    pub name: String,
    pub unit: String,
    #[serde(default)]
    pub min_stock: i64,
}

/// Input for updating an item
#[derive(Debug, Deserialize)]
pub struct UpdateItemInput {
    pub name: Option<String>,
    pub unit: Option<String>,
    pub min_stock: Option<i64>,
}

impl CatalogService {
    /// Create a new CatalogService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Register a new item and seed its stock at zero
    pub async fn create_item(&self, input: CreateItemInput) -> AppResult<Item> {
        validate_name(&input.name).map_err(|msg| AppError::Validation {
            field: "name".to_string(),
            message: msg.to_string(),
        })?;
        validate_unit(&input.unit).map_err(|msg| AppError::Validation {
            field: "unit".to_string(),
            message: msg.to_string(),
        })?;
        validate_min_stock(input.min_stock).map_err(|msg| AppError::Validation {
            field: "min_stock".to_string(),
            message: msg.to_string(),
        })?;

        let mut tx = self.db.begin().await?;

        let item = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (name, unit, min_stock)
            VALUES ($1, $2, $3)
            RETURNING id, name, unit, min_stock, is_deleted, created_at, updated_at
            "#,
        )
        .bind(input.name.trim())
        .bind(input.unit.trim())
        .bind(input.min_stock)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO stock_levels (item_id, quantity) VALUES ($1, 0)")
            .bind(item.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(item)
    }

    /// Active items with their current quantity, oldest first
    pub async fn list_items(&self) -> AppResult<Vec<ItemWithStock>> {
        let items = sqlx::query_as::<_, ItemWithStock>(
            r#"
            SELECT i.id, i.name, i.unit, i.min_stock,
                   COALESCE(s.quantity, 0) AS quantity,
                   i.created_at
            FROM items i
            LEFT JOIN stock_levels s ON s.item_id = i.id
            WHERE i.is_deleted = FALSE
            ORDER BY i.created_at ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(items)
    }

    /// Update name, unit, or minimum stock of an item
    pub async fn update_item(&self, item_id: Uuid, input: UpdateItemInput) -> AppResult<Item> {
        let existing = sqlx::query_as::<_, (String, String, i64)>(
            "SELECT name, unit, min_stock FROM items WHERE id = $1 AND is_deleted = FALSE",
        )
        .bind(item_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(AppError::UnknownItem)?;

        let name = input.name.unwrap_or(existing.0);
        let unit = input.unit.unwrap_or(existing.1);
        let min_stock = input.min_stock.unwrap_or(existing.2);

        validate_name(&name).map_err(|msg| AppError::Validation {
            field: "name".to_string(),
            message: msg.to_string(),
        })?;
        validate_unit(&unit).map_err(|msg| AppError::Validation {
            field: "unit".to_string(),
            message: msg.to_string(),
        })?;
        validate_min_stock(min_stock).map_err(|msg| AppError::Validation {
            field: "min_stock".to_string(),
            message: msg.to_string(),
        })?;

        let item = sqlx::query_as::<_, Item>(
            r#"
            UPDATE items
            SET name = $1, unit = $2, min_stock = $3, updated_at = NOW()
            WHERE id = $4
            RETURNING id, name, unit, min_stock, is_deleted, created_at, updated_at
            "#,
        )
        .bind(name.trim())
        .bind(unit.trim())
        .bind(min_stock)
        .bind(item_id)
        .fetch_one(&self.db)
        .await?;

        Ok(item)
    }

    /// Soft-delete an item; its movement history stays intact
    pub async fn delete_item(&self, item_id: Uuid) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE items SET is_deleted = TRUE, updated_at = NOW() WHERE id = $1 AND is_deleted = FALSE",
        )
        .bind(item_id)
        .execute(&self.db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::UnknownItem);
        }

        Ok(())
    }
}
