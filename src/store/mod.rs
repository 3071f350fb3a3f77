// ABOUTME: Store abstraction layer for the user and training collections
// ABOUTME: Trait seams consumed by the persistence facade via dependency injection
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Store traits for the two record collections.
//!
//! Each collection gets its own capability trait so the façade (and tests)
//! can inject alternative implementations. The bundled implementation is
//! [`sqlite::SqliteStore`], which backs both collections with one
//! connection pool.

use crate::errors::StoreResult;
use crate::models::{Training, User};
use async_trait::async_trait;
use uuid::Uuid;

pub mod sqlite;

pub use sqlite::SqliteStore;

/// Operations on the user collection.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Insert a new user record.
    ///
    /// Checks for an existing record with the same username before
    /// writing; the store-level unique constraint remains the
    /// authoritative enforcement, so a racing insert of the same username
    /// surfaces as `UserAlreadyExists` no matter which caller loses.
    ///
    /// # Errors
    ///
    /// `UserAlreadyExists` on a duplicate username; `InsertFailed` when
    /// the write fails or the existence check cannot be completed.
    async fn register(&self, user: &User) -> StoreResult<Uuid>;

    /// Look up a user by username.
    ///
    /// Returns the matched record unconditionally; password verification
    /// is the caller's responsibility (see [`crate::auth`]).
    ///
    /// # Errors
    ///
    /// `UserNotFound` when no record matches; `StoreReadFailed` on any
    /// other read or decode error.
    async fn find_by_username(&self, username: &str) -> StoreResult<User>;
}

/// Operations on the training collection.
#[async_trait]
pub trait TrainingStore: Send + Sync {
    /// Insert a training record, assigning it a fresh id.
    ///
    /// The caller-supplied id is always replaced. The owning username is
    /// not checked against the user collection — referential integrity is
    /// a non-goal here.
    ///
    /// # Errors
    ///
    /// `InsertFailed` when the write fails.
    async fn insert(&self, training: Training) -> StoreResult<Uuid>;

    /// Hard-delete the training with the given id.
    ///
    /// Deleting an id that matches nothing is an error, not a no-op: the
    /// caller observes the difference between "deleted" and "nothing to
    /// delete".
    ///
    /// # Errors
    ///
    /// `TrainingNotFound` when the id matches no record; `DeleteFailed`
    /// on any other delete error.
    async fn delete(&self, id: Uuid) -> StoreResult<()>;

    /// List all trainings owned by a username, in store-native order.
    ///
    /// An unknown username yields an empty sequence, not an error.
    ///
    /// # Errors
    ///
    /// `QueryFailed` when the query fails or any one record fails to
    /// decode (the whole listing aborts; no partial results).
    async fn list_by_user(&self, username: &str) -> StoreResult<Vec<Training>>;
}

/// Connection lifecycle shared by both collections.
#[async_trait]
pub trait StoreLifecycle: Send + Sync {
    /// Issue a minimal liveness probe against the store.
    ///
    /// # Errors
    ///
    /// `StoreReadFailed` when the store does not answer.
    async fn ping(&self) -> StoreResult<()>;

    /// Release the store connection.
    ///
    /// # Errors
    ///
    /// Implementation-specific; the bundled SQLite store cannot fail here.
    async fn disconnect(&self) -> StoreResult<()>;
}
