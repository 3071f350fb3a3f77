// ABOUTME: SQLite-backed document store for the user and training collections
// ABOUTME: Trainings persist as self-describing JSON documents in a doc column
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the store traits.
//!
//! Users get fixed columns because the uniqueness invariant needs a
//! store-level `UNIQUE` constraint. Trainings are document-shaped: the
//! whole record is serialized to JSON and kept in a single `doc` column,
//! with the owning username extracted into an indexed column for the
//! per-user listing. Listing order is insertion (rowid) order.

use crate::errors::{StoreError, StoreResult};
use crate::models::{Training, User};
use crate::store::{CredentialStore, StoreLifecycle, TrainingStore};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::{debug, error};
use uuid::Uuid;

/// SQLite store backing both record collections with one pool.
///
/// The pool is safe for concurrent use; clones share it.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if necessary) the database and run migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or the
    /// schema migration fails.
    pub async fn connect(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") && !database_url.contains('?')
        {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_string()
        };

        let pool = SqlitePool::connect(&connection_options).await?;

        let store = Self { pool };
        store.migrate().await?;

        Ok(store)
    }

    /// Create the two collection tables and their indexes.
    ///
    /// The `UNIQUE` constraint on `username` is the authoritative
    /// enforcement of the one-record-per-username invariant.
    ///
    /// # Errors
    ///
    /// Returns an error if any schema statement fails.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_username ON users(username)")
            .execute(&self.pool)
            .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS trainings (
                id TEXT PRIMARY KEY,
                username TEXT NOT NULL,
                doc TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_trainings_username ON trainings(username)")
            .execute(&self.pool)
            .await?;

        debug!("store schema ready");
        Ok(())
    }
}

fn row_to_user(row: &SqliteRow) -> StoreResult<User> {
    let id: String = row.try_get("id").map_err(StoreError::read_failed)?;
    let username: String = row.try_get("username").map_err(StoreError::read_failed)?;
    let password_hash: String = row
        .try_get("password_hash")
        .map_err(StoreError::read_failed)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(StoreError::read_failed)?;

    Ok(User {
        id: Uuid::parse_str(&id).map_err(StoreError::read_failed)?,
        username,
        password_hash,
        created_at,
    })
}

#[async_trait]
impl CredentialStore for SqliteStore {
    async fn register(&self, user: &User) -> StoreResult<Uuid> {
        // Fast-path duplicate check. An indeterminate check aborts the
        // registration rather than risking a blind insert.
        let existing = sqlx::query("SELECT id FROM users WHERE username = $1")
            .bind(&user.username)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::insert_failed)?;

        if existing.is_some() {
            return Err(StoreError::UserAlreadyExists {
                username: user.username.clone(),
            });
        }

        let result = sqlx::query(
            "INSERT INTO users (id, username, password_hash, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {
                debug!("registered user {} ({})", user.username, user.id);
                Ok(user.id)
            }
            // Lost the check-then-insert race to a concurrent registration
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(StoreError::UserAlreadyExists {
                    username: user.username.clone(),
                })
            }
            Err(e) => {
                error!("failed to insert user {}: {e}", user.username);
                Err(StoreError::insert_failed(e))
            }
        }
    }

    async fn find_by_username(&self, username: &str) -> StoreResult<User> {
        let row = sqlx::query(
            "SELECT id, username, password_hash, created_at FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::read_failed)?;

        match row {
            Some(row) => row_to_user(&row),
            None => Err(StoreError::UserNotFound),
        }
    }
}

#[async_trait]
impl TrainingStore for SqliteStore {
    async fn insert(&self, mut training: Training) -> StoreResult<Uuid> {
        training.id = Uuid::new_v4();

        let doc = serde_json::to_string(&training).map_err(StoreError::insert_failed)?;

        sqlx::query("INSERT INTO trainings (id, username, doc) VALUES ($1, $2, $3)")
            .bind(training.id.to_string())
            .bind(&training.username)
            .bind(doc)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("failed to insert training for {}: {e}", training.username);
                StoreError::insert_failed(e)
            })?;

        debug!("inserted training {} for {}", training.id, training.username);
        Ok(training.id)
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM trainings WHERE id = $1")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("failed to delete training {id}: {e}");
                StoreError::delete_failed(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(StoreError::TrainingNotFound { id });
        }

        debug!("deleted training {id}");
        Ok(())
    }

    async fn list_by_user(&self, username: &str) -> StoreResult<Vec<Training>> {
        let rows = sqlx::query("SELECT doc FROM trainings WHERE username = $1 ORDER BY rowid")
            .bind(username)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::query_failed)?;

        let mut trainings = Vec::with_capacity(rows.len());
        for row in &rows {
            let doc: String = row.try_get("doc").map_err(StoreError::query_failed)?;
            // One undecodable document aborts the whole listing
            let training = serde_json::from_str(&doc).map_err(|e| {
                error!("failed to decode training document for {username}: {e}");
                StoreError::query_failed(e)
            })?;
            trainings.push(training);
        }

        Ok(trainings)
    }
}

#[async_trait]
impl StoreLifecycle for SqliteStore {
    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::read_failed)?;
        Ok(())
    }

    async fn disconnect(&self) -> StoreResult<()> {
        self.pool.close().await;
        debug!("store connection closed");
        Ok(())
    }
}
