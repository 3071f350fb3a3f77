// ABOUTME: Typed error taxonomy for store operations
// ABOUTME: Maps each failure kind to the HTTP status a transport layer should return
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error taxonomy surfaced by every store operation.
//!
//! The core never recovers from a store failure and never retries: every
//! error is returned as a typed value and the caller decides what to do
//! with it. [`StoreError::http_status`] encodes the transport mapping so
//! all callers agree on it — in particular, [`StoreError::UserNotFound`]
//! maps to the same status as a password mismatch computed at the
//! authentication boundary, so neither path reveals which check failed.

use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Boxed source error preserved for chaining.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure kinds raised by the persistence core.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with this username already exists.
    #[error("user \"{username}\" already exists")]
    UserAlreadyExists {
        /// The username that collided
        username: String,
    },

    /// No record matches the requested username.
    #[error("user not found")]
    UserNotFound,

    /// A read or decode failed for a reason other than not-found.
    #[error("store read failed")]
    StoreReadFailed(#[source] BoxError),

    /// A write to the store failed.
    #[error("failed to insert record")]
    InsertFailed(#[source] BoxError),

    /// No training record matches the requested id.
    #[error("training {id} does not exist")]
    TrainingNotFound {
        /// The id that matched nothing
        id: Uuid,
    },

    /// A delete failed for a reason other than not-found.
    #[error("store delete failed")]
    DeleteFailed(#[source] BoxError),

    /// A listing failed, either in the query itself or while decoding a
    /// record. One undecodable document aborts the whole listing; partial
    /// results are never returned.
    #[error("training query failed")]
    QueryFailed(#[source] BoxError),

    /// The operation exceeded its configured time budget.
    #[error("{operation} timed out after {limit:?}")]
    Timeout {
        /// Name of the operation that expired
        operation: &'static str,
        /// The budget that was exceeded
        limit: Duration,
    },
}

impl StoreError {
    /// Wrap a store write error.
    pub fn insert_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InsertFailed(Box::new(source))
    }

    /// Wrap a store read or decode error.
    pub fn read_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::StoreReadFailed(Box::new(source))
    }

    /// Wrap a store delete error.
    pub fn delete_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::DeleteFailed(Box::new(source))
    }

    /// Wrap a listing query or decode error.
    pub fn query_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::QueryFailed(Box::new(source))
    }

    /// Whether this error is a timeout.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// The HTTP status a transport layer should answer with.
    ///
    /// `UserNotFound` deliberately maps to 401 rather than 404: a failed
    /// password verification at the boundary produces the same status, so
    /// a client cannot probe which usernames exist.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::UserAlreadyExists { .. } => 409,
            Self::UserNotFound => 401,
            Self::TrainingNotFound { .. } => 404,
            Self::Timeout { .. } => 504,
            Self::StoreReadFailed(_)
            | Self::InsertFailed(_)
            | Self::DeleteFailed(_)
            | Self::QueryFailed(_) => 500,
        }
    }
}
