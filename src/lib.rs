// ABOUTME: Library entry point for the workout tracker persistence core
// ABOUTME: Exposes the store traits, persistence facade, and typed error taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Workout Tracker Persistence Core
//!
//! Persistence and domain-integrity layer for a personal workout-tracking
//! service. This crate mediates all reads and writes to the user and
//! training collections, enforces uniqueness and existence invariants, and
//! defines the error taxonomy a transport layer translates into response
//! status codes.
//!
//! The HTTP routing, JSON wire handling, and CORS concerns live outside
//! this crate: callers reach the store through [`service::PersistenceService`]
//! and map each [`errors::StoreError`] kind via
//! [`errors::StoreError::http_status`].
//!
//! ## Architecture
//!
//! - **Models**: `User`, `Training`, and embedded `Exercise` records
//! - **Store**: `CredentialStore` / `TrainingStore` traits with a
//!   SQLite-backed document store implementation
//! - **Service**: the façade owning the connection lifecycle and the
//!   per-operation timeout budgets
//! - **Auth**: password hashing and verification at the authentication
//!   boundary
//!
//! ## Example
//!
//! ```rust,no_run
//! use workout_tracker::config::StoreConfig;
//! use workout_tracker::service::PersistenceService;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = StoreConfig::from_env()?;
//!     let service = PersistenceService::connect(&config).await?;
//!
//!     let report = service.health().await?;
//!     println!("store status: {:?}", report.status);
//!
//!     service.disconnect().await?;
//!     Ok(())
//! }
//! ```

/// Password hashing and verification for the authentication boundary
pub mod auth;

/// Startup configuration read from the environment
pub mod config;

/// Typed error taxonomy surfaced to transport callers
pub mod errors;

/// Health probe status payloads
pub mod health;

/// Structured logging setup
pub mod logging;

/// Domain records for users, trainings, and exercises
pub mod models;

/// Persistence façade owning the store connection lifecycle
pub mod service;

/// Store traits and the SQLite document store implementation
pub mod store;
