//! Inventory service: movement ledger, current-stock projection, low-stock view
//!
//! Movements are append-only. The projection in `stock_levels` is updated in
//! the same transaction as the ledger insert, using an atomic
//! insert-or-increment so concurrent movements against one item never lose
//! an update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shared::stock;
use shared::types::{ChangeType, Pagination, PlanStatus};
use shared::validation::validate_quantity;

use crate::error::{AppError, AppResult};

/// Inventory service for recording movements and reading stock state
#[derive(Clone)]
pub struct InventoryService {
    db: PgPool,
}

/// One recorded stock movement
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Movement {
    pub id: Uuid,
    pub item_id: Uuid,
    pub change_type: String,
    pub quantity: i64,
    pub user_id: Uuid,
    pub supplier_id: Option<Uuid>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for recording a stock movement
#[derive(Debug, Deserialize)]
pub struct RecordMovementInput {
    pub item_id: Uuid,
    pub change_type: ChangeType,
    pub quantity: i64,
    /// Supplier reference; only meaningful for incoming stock
    pub supplier_id: Option<Uuid>,
    /// Free text, e.g. distinguishing waste from a normal out
    pub note: Option<String>,
}

/// Movement history row joined with display names
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MovementView {
    pub id: Uuid,
    pub change_type: String,
    pub quantity: i64,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub item_name: Option<String>,
    pub supplier_name: Option<String>,
    pub user_name: Option<String>,
}

/// Current stock for one item
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ItemStock {
    pub item_id: Uuid,
    pub name: String,
    pub unit: String,
    pub min_stock: i64,
    pub quantity: i64,
}

/// Row for the low-stock query
#[derive(Debug, FromRow)]
struct LowStockRow {
    item_id: Uuid,
    name: String,
    unit: String,
    min_stock: i64,
    quantity: i64,
    plan_status: Option<String>,
    buyer_name: Option<String>,
}

/// One entry on the low-stock view
#[derive(Debug, Clone, Serialize)]
pub struct LowStockEntry {
    pub item_id: Uuid,
    pub name: String,
    pub unit: String,
    pub min_stock: i64,
    pub quantity: i64,
    /// How many units below the minimum the item currently is
    pub shortage: i64,
    pub plan_status: Option<PlanStatus>,
    pub assigned_buyer: Option<String>,
}

impl InventoryService {
    /// Create a new InventoryService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record a stock movement and update the projection
    ///
    /// The ledger insert and the projection upsert happen in one
    /// transaction: either both land or neither does. The projection update
    /// is a single insert-or-increment statement keyed by item id, not a
    /// read-then-write.
    pub async fn record_movement(
        &self,
        actor_id: Uuid,
        input: RecordMovementInput,
    ) -> AppResult<Movement> {
        validate_quantity(input.quantity).map_err(|_| AppError::InvalidQuantity)?;

        let mut tx = self.db.begin().await?;

        // The item must exist and not be soft-deleted
        let item_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM items WHERE id = $1 AND is_deleted = FALSE)",
        )
        .bind(input.item_id)
        .fetch_one(&mut *tx)
        .await?;

        if !item_exists {
            return Err(AppError::UnknownItem);
        }

        let movement = sqlx::query_as::<_, Movement>(
            r#"
            INSERT INTO stock_movements (item_id, change_type, quantity, user_id, supplier_id, note)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, item_id, change_type, quantity, user_id, supplier_id, note, created_at
            "#,
        )
        .bind(input.item_id)
        .bind(input.change_type.as_str())
        .bind(input.quantity)
        .bind(actor_id)
        .bind(input.supplier_id)
        .bind(&input.note)
        .fetch_one(&mut *tx)
        .await?;

        let delta = input.change_type.signed(input.quantity);

        sqlx::query(
            r#"
            INSERT INTO stock_levels (item_id, quantity)
            VALUES ($1, $2)
            ON CONFLICT (item_id) DO UPDATE SET
                quantity = stock_levels.quantity + EXCLUDED.quantity,
                updated_at = NOW()
            "#,
        )
        .bind(input.item_id)
        .bind(delta)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(
            item_id = %movement.item_id,
            change_type = %movement.change_type,
            quantity = movement.quantity,
            "stock movement recorded"
        );

        Ok(movement)
    }

    /// Movement history, newest first, joined with display names
    pub async fn list_movements(&self, pagination: Pagination) -> AppResult<Vec<MovementView>> {
        let pagination = pagination.clamped();

        let movements = sqlx::query_as::<_, MovementView>(
            r#"
            SELECT m.id, m.change_type, m.quantity, m.note, m.created_at,
                   i.name AS item_name,
                   s.name AS supplier_name,
                   u.name AS user_name
            FROM stock_movements m
            LEFT JOIN items i ON i.id = m.item_id
            LEFT JOIN suppliers s ON s.id = m.supplier_id
            LEFT JOIN users u ON u.id = m.user_id
            ORDER BY m.created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(pagination.limit)
        .bind(pagination.offset)
        .fetch_all(&self.db)
        .await?;

        Ok(movements)
    }

    /// Current quantity for one item, zero when nothing has been recorded
    pub async fn get_stock(&self, item_id: Uuid) -> AppResult<i64> {
        let item_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM items WHERE id = $1 AND is_deleted = FALSE)",
        )
        .bind(item_id)
        .fetch_one(&self.db)
        .await?;

        if !item_exists {
            return Err(AppError::UnknownItem);
        }

        let quantity =
            sqlx::query_scalar::<_, i64>("SELECT quantity FROM stock_levels WHERE item_id = $1")
                .bind(item_id)
                .fetch_optional(&self.db)
                .await?
                .unwrap_or(0);

        Ok(quantity)
    }

    /// Current stock for every active item, ordered by name
    pub async fn stock_overview(&self) -> AppResult<Vec<ItemStock>> {
        let rows = sqlx::query_as::<_, ItemStock>(
            r#"
            SELECT i.id AS item_id, i.name, i.unit, i.min_stock,
                   COALESCE(s.quantity, 0) AS quantity
            FROM items i
            LEFT JOIN stock_levels s ON s.item_id = i.id
            WHERE i.is_deleted = FALSE
            ORDER BY i.name
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }

    /// Items below their minimum, largest deficit first
    ///
    /// When an item has several open purchase plans, the most recent one is
    /// surfaced.
    pub async fn low_stock(&self) -> AppResult<Vec<LowStockEntry>> {
        let rows = sqlx::query_as::<_, LowStockRow>(
            r#"
            SELECT i.id AS item_id, i.name, i.unit, i.min_stock,
                   COALESCE(s.quantity, 0) AS quantity,
                   p.status AS plan_status,
                   u.name AS buyer_name
            FROM items i
            LEFT JOIN stock_levels s ON s.item_id = i.id
            LEFT JOIN LATERAL (
                SELECT status, assigned_to
                FROM purchase_plans
                WHERE item_id = i.id AND status = 'open'
                ORDER BY created_at DESC
                LIMIT 1
            ) p ON TRUE
            LEFT JOIN users u ON u.id = p.assigned_to
            WHERE i.is_deleted = FALSE
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(Self::evaluate(rows))
    }

    /// Keep rows below their minimum and order them by descending shortage.
    fn evaluate(rows: Vec<LowStockRow>) -> Vec<LowStockEntry> {
        let mut entries: Vec<LowStockEntry> = rows
            .into_iter()
            .filter(|row| stock::is_below_minimum(row.min_stock, row.quantity))
            .map(|row| LowStockEntry {
                item_id: row.item_id,
                name: row.name,
                unit: row.unit,
                min_stock: row.min_stock,
                quantity: row.quantity,
                shortage: stock::shortage(row.min_stock, row.quantity),
                plan_status: row.plan_status.as_deref().and_then(PlanStatus::from_str),
                assigned_buyer: row.buyer_name,
            })
            .collect();

        // Stable sort keeps equal shortages in query order
        entries.sort_by(|a, b| b.shortage.cmp(&a.shortage));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, min_stock: i64, quantity: i64) -> LowStockRow {
        LowStockRow {
            item_id: Uuid::new_v4(),
            name: name.to_string(),
            unit: "kg".to_string(),
            min_stock,
            quantity,
            plan_status: None,
            buyer_name: None,
        }
    }

    #[test]
    fn evaluate_keeps_only_deficits() {
        let entries = InventoryService::evaluate(vec![
            row("beans", 10, 12),
            row("milk", 10, 0),
            row("sugar", 5, 5),
        ]);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "milk");
        assert_eq!(entries[0].shortage, 10);
    }

    #[test]
    fn evaluate_orders_by_descending_shortage() {
        let entries = InventoryService::evaluate(vec![
            row("cups", 8, 6),
            row("beans", 20, 2),
            row("milk", 10, 5),
        ]);

        let shortages: Vec<i64> = entries.iter().map(|e| e.shortage).collect();
        assert_eq!(shortages, vec![18, 5, 2]);
    }

    #[test]
    fn evaluate_counts_negative_stock_in_full() {
        let entries = InventoryService::evaluate(vec![row("syrup", 3, -4)]);

        assert_eq!(entries[0].shortage, 7);
    }

    #[test]
    fn evaluate_parses_plan_status() {
        let mut r = row("milk", 10, 0);
        r.plan_status = Some("open".to_string());
        r.buyer_name = Some("Aoi".to_string());

        let entries = InventoryService::evaluate(vec![r]);
        assert_eq!(entries[0].plan_status, Some(PlanStatus::Open));
        assert_eq!(entries[0].assigned_buyer.as_deref(), Some("Aoi"));
    }
}
