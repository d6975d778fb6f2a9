//! Supplier directory service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shared::validation::validate_name;

use crate::error::{AppError, AppResult};

/// Supplier directory service
#[derive(Clone)]
pub struct SupplierService {
    db: PgPool,
}

/// A supplier record
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Supplier {
    pub id: Uuid,
    pub name: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a supplier
#[derive(Debug, Deserialize)]
pub struct CreateSupplierInput {
    pub name: String,
    pub note: Option<String>,
}

impl SupplierService {
    /// Create a new SupplierService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Add a supplier to the directory
    pub async fn create_supplier(&self, input: CreateSupplierInput) -> AppResult<Supplier> {
        validate_name(&input.name).map_err(|msg| AppError::Validation {
            field: "name".to_string(),
            message: msg.to_string(),
        })?;

        let supplier = sqlx::query_as::<_, Supplier>(
            r#"
            INSERT INTO suppliers (name, note)
            VALUES ($1, $2)
            RETURNING id, name, note, created_at
            "#,
        )
        .bind(input.name.trim())
        .bind(&input.note)
        .fetch_one(&self.db)
        .await?;

        Ok(supplier)
    }

    /// All suppliers, ordered by name
    pub async fn list_suppliers(&self) -> AppResult<Vec<Supplier>> {
        let suppliers = sqlx::query_as::<_, Supplier>(
            "SELECT id, name, note, created_at FROM suppliers ORDER BY name",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(suppliers)
    }

    /// Remove a supplier; past movements keep a null reference
    pub async fn delete_supplier(&self, supplier_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
            .bind(supplier_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Supplier".to_string()));
        }

        Ok(())
    }
}
