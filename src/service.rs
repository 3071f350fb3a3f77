// ABOUTME: Persistence facade owning the store connection lifecycle
// ABOUTME: Bounds every store round trip with a per-operation timeout budget
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The persistence façade consumed by the transport layer.
//!
//! [`PersistenceService`] is generic over the store traits so tests (and
//! alternative backends) can inject their own implementation. Every
//! operation performs exactly one store round trip bounded by
//! `tokio::time::timeout`; nothing is retried — a transient failure
//! surfaces to the caller immediately as a typed error.

use crate::config::{StoreConfig, Timeouts};
use crate::errors::{StoreError, StoreResult};
use crate::health::HealthReport;
use crate::models::{Training, User};
use crate::store::{CredentialStore, SqliteStore, StoreLifecycle, TrainingStore};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

/// Façade over the user and training collections.
///
/// Holds no mutable state of its own; the underlying pool is safe for
/// concurrent use, so one service instance serves all inbound requests.
pub struct PersistenceService<S> {
    store: S,
    timeouts: Timeouts,
}

impl PersistenceService<SqliteStore> {
    /// Connect to the configured store, run migrations, and build the
    /// façade.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the store
    /// cannot be reached.
    pub async fn connect(config: &StoreConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let store = SqliteStore::connect(&config.database_url).await?;
        info!("persistence store ready: {}", config.database_url);
        Ok(Self::new(store, config.timeouts.clone()))
    }
}

impl<S> PersistenceService<S>
where
    S: CredentialStore + TrainingStore + StoreLifecycle,
{
    /// Build a façade over an already-connected store.
    pub const fn new(store: S, timeouts: Timeouts) -> Self {
        Self { store, timeouts }
    }

    /// Register a new user.
    ///
    /// A fresh id is generated here; whatever identifier the caller had
    /// is irrelevant. `password_hash` must already be hashed (see
    /// [`crate::auth::hash_password`]).
    ///
    /// # Errors
    ///
    /// `UserAlreadyExists`, `InsertFailed`, or `Timeout`.
    pub async fn register(&self, username: &str, password_hash: &str) -> StoreResult<User> {
        let user = User::new(username.to_owned(), password_hash.to_owned());
        self.bounded("register", self.timeouts.credential, self.store.register(&user))
            .await?;
        info!("user registered: {} ({})", user.username, user.id);
        Ok(user)
    }

    /// Look up the account record for a login attempt.
    ///
    /// Returns the matched record unconditionally; the caller verifies the
    /// password with [`crate::auth::verify_password`] and answers a
    /// mismatch with the same response as `UserNotFound`.
    ///
    /// # Errors
    ///
    /// `UserNotFound`, `StoreReadFailed`, or `Timeout`.
    pub async fn authenticate(&self, username: &str) -> StoreResult<User> {
        self.bounded(
            "authenticate",
            self.timeouts.credential,
            self.store.find_by_username(username),
        )
        .await
    }

    /// Store a training session and return its generated id.
    ///
    /// # Errors
    ///
    /// `InsertFailed` or `Timeout`.
    pub async fn create_training(&self, training: Training) -> StoreResult<Uuid> {
        self.bounded(
            "create_training",
            self.timeouts.training,
            self.store.insert(training),
        )
        .await
    }

    /// Delete the training with the given id.
    ///
    /// # Errors
    ///
    /// `TrainingNotFound` when the id matches nothing (delete is not
    /// idempotent-silent), `DeleteFailed`, or `Timeout`.
    pub async fn delete_training(&self, id: Uuid) -> StoreResult<()> {
        self.bounded("delete_training", self.timeouts.training, self.store.delete(id))
            .await
    }

    /// List all trainings owned by a username, in store order.
    ///
    /// # Errors
    ///
    /// `QueryFailed` or `Timeout`.
    pub async fn list_trainings(&self, username: &str) -> StoreResult<Vec<Training>> {
        self.bounded(
            "list_trainings",
            self.timeouts.training,
            self.store.list_by_user(username),
        )
        .await
    }

    /// Probe store liveness.
    ///
    /// A probe the store answers negatively yields an `Unhealthy` report;
    /// the process-abort decision belongs to the caller.
    ///
    /// # Errors
    ///
    /// `Timeout` when the probe exceeds its budget.
    pub async fn health(&self) -> StoreResult<HealthReport> {
        let started = Instant::now();
        match self
            .bounded("health", self.timeouts.health, self.store.ping())
            .await
        {
            Ok(()) => Ok(HealthReport::healthy(started.elapsed())),
            Err(err @ StoreError::Timeout { .. }) => Err(err),
            Err(err) => Ok(HealthReport::unhealthy(err.to_string(), started.elapsed())),
        }
    }

    /// Release the store connection.
    ///
    /// Safe to call on every exit path; the pool also closes when the
    /// service is dropped.
    ///
    /// # Errors
    ///
    /// Backend-specific; the bundled SQLite store cannot fail here.
    pub async fn disconnect(&self) -> StoreResult<()> {
        self.store.disconnect().await?;
        info!("persistence store disconnected");
        Ok(())
    }

    async fn bounded<T, F>(
        &self,
        operation: &'static str,
        limit: Duration,
        fut: F,
    ) -> StoreResult<T>
    where
        F: Future<Output = StoreResult<T>>,
    {
        match tokio::time::timeout(limit, fut).await {
            Ok(result) => result,
            Err(_) => {
                warn!("{operation} exceeded its {limit:?} budget");
                Err(StoreError::Timeout { operation, limit })
            }
        }
    }
}
