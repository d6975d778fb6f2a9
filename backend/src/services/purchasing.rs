//! Purchase plan service
//!
//! A plan is an open request to replenish an item, assigned to a
//! responsible staff member. Plans start open and are closed explicitly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shared::validation::validate_quantity;

use crate::error::{AppError, AppResult};

/// Purchase plan service
#[derive(Clone)]
pub struct PurchasingService {
    db: PgPool,
}

/// A replenishment request
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Plan {
    pub id: Uuid,
    pub item_id: Uuid,
    pub assigned_to: Uuid,
    pub quantity: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Plan row joined with display names
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PlanView {
    pub id: Uuid,
    pub quantity: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub item_name: Option<String>,
    pub assigned_name: Option<String>,
}

/// Input for creating a plan
#[derive(Debug, Deserialize)]
pub struct AddPlanInput {
    pub item_id: Uuid,
    pub assigned_to: Uuid,
    #[serde(default = "AddPlanInput::default_quantity")]
    pub quantity: i64,
}

impl AddPlanInput {
    fn default_quantity() -> i64 {
        1
    }
}

impl PurchasingService {
    /// Create a new PurchasingService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Open a replenishment request for an item
    pub async fn add_plan(&self, input: AddPlanInput) -> AppResult<Plan> {
        validate_quantity(input.quantity).map_err(|_| AppError::InvalidQuantity)?;

        let item_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM items WHERE id = $1 AND is_deleted = FALSE)",
        )
        .bind(input.item_id)
        .fetch_one(&self.db)
        .await?;

        if !item_exists {
            return Err(AppError::UnknownItem);
        }

        let plan = sqlx::query_as::<_, Plan>(
            r#"
            INSERT INTO purchase_plans (item_id, assigned_to, quantity, status)
            VALUES ($1, $2, $3, 'open')
            RETURNING id, item_id, assigned_to, quantity, status, created_at, updated_at
            "#,
        )
        .bind(input.item_id)
        .bind(input.assigned_to)
        .bind(input.quantity)
        .fetch_one(&self.db)
        .await?;

        Ok(plan)
    }

    /// Close an open plan
    pub async fn complete_plan(&self, plan_id: Uuid) -> AppResult<Plan> {
        let completed = sqlx::query_as::<_, Plan>(
            r#"
            UPDATE purchase_plans
            SET status = 'done', updated_at = NOW()
            WHERE id = $1 AND status = 'open'
            RETURNING id, item_id, assigned_to, quantity, status, created_at, updated_at
            "#,
        )
        .bind(plan_id)
        .fetch_optional(&self.db)
        .await?;

        if let Some(plan) = completed {
            return Ok(plan);
        }

        // Either the plan never existed or it was already closed
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM purchase_plans WHERE id = $1)")
                .bind(plan_id)
                .fetch_one(&self.db)
                .await?;

        if exists {
            Err(AppError::Conflict("Plan is already completed".to_string()))
        } else {
            Err(AppError::NotFound("Plan".to_string()))
        }
    }

    /// All plans, newest first, joined with display names
    pub async fn list_plans(&self) -> AppResult<Vec<PlanView>> {
        let plans = sqlx::query_as::<_, PlanView>(
            r#"
            SELECT p.id, p.quantity, p.status, p.created_at,
                   i.name AS item_name,
                   u.name AS assigned_name
            FROM purchase_plans p
            LEFT JOIN items i ON i.id = p.item_id
            LEFT JOIN users u ON u.id = p.assigned_to
            ORDER BY p.created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(plans)
    }
}
