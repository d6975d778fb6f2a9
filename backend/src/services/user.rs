//! Account management service
//!
//! Owner-gated at the route layer. The role is a required field: an account
//! is created as owner or staff explicitly, never defaulted.

use bcrypt::{hash, DEFAULT_COST};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shared::types::Role;
use shared::validation::{validate_name, validate_password};

use crate::error::{AppError, AppResult};

/// Account management service
#[derive(Clone)]
pub struct UserService {
    db: PgPool,
}

/// A user account, without credentials
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating an account
#[derive(Debug, Deserialize)]
pub struct CreateUserInput {
    pub name: String,
    pub password: String,
    pub role: Role,
}

impl UserService {
    /// Create a new UserService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a staff or owner account
    pub async fn create_user(&self, input: CreateUserInput) -> AppResult<User> {
        validate_name(&input.name).map_err(|msg| AppError::Validation {
            field: "name".to_string(),
            message: msg.to_string(),
        })?;
        validate_password(&input.password).map_err(|msg| AppError::Validation {
            field: "password".to_string(),
            message: msg.to_string(),
        })?;

        let name = input.name.trim();

        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE name = $1)",
        )
        .bind(name)
        .fetch_one(&self.db)
        .await?;

        if taken {
            return Err(AppError::DuplicateEntry("name".to_string()));
        }

        let password_hash = hash(&input.password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, password_hash, role)
            VALUES ($1, $2, $3)
            RETURNING id, name, role, created_at
            "#,
        )
        .bind(name)
        .bind(&password_hash)
        .bind(input.role.as_str())
        .fetch_one(&self.db)
        .await?;

        Ok(user)
    }

    /// All accounts, credentials excluded
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, role, created_at FROM users ORDER BY created_at ASC",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(users)
    }
}
