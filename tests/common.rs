// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Provides store setup, quiet logging, and sample record builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

//! Shared setup for the integration test suites.

use chrono::{TimeZone, Utc};
use std::sync::Once;
use tempfile::TempDir;
use workout_tracker::config::Timeouts;
use workout_tracker::models::{exercise_types, Exercise, Training};
use workout_tracker::service::PersistenceService;
use workout_tracker::store::SqliteStore;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging once per test process.
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Respects RUST_LOG; a second subscriber install is a no-op error
        let _ = workout_tracker::logging::init_logging();
    });
}

/// File-backed test store.
///
/// Returns the temp dir alongside the service so the database file
/// outlives the test body.
pub async fn create_test_service() -> (PersistenceService<SqliteStore>, TempDir) {
    init_test_logging();
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let db_path = dir.path().join("workout-tracker-test.db");
    let store = SqliteStore::connect(&format!("sqlite:{}", db_path.display()))
        .await
        .expect("failed to open test store");
    (PersistenceService::new(store, Timeouts::default()), dir)
}

/// A training record with a deterministic, fully populated payload.
pub fn sample_training(username: &str, number: u32) -> Training {
    Training {
        id: uuid::Uuid::nil(),
        username: username.to_owned(),
        date: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
        tonnage: 1250.5,
        number,
        total_workout_seconds: Some(1800),
        total_rest_seconds: Some(600),
        exercises: vec![
            Exercise {
                exercise_type: exercise_types::PULL_UP.to_owned(),
                count: 10,
                weight: 0.0,
                duration_workout_seconds: Some(45),
                duration_rest_seconds: Some(90),
            },
            Exercise {
                exercise_type: exercise_types::PUSH_UP.to_owned(),
                count: 20,
                weight: 5.0,
                duration_workout_seconds: None,
                duration_rest_seconds: None,
            },
            Exercise {
                exercise_type: "Squat".to_owned(),
                count: 15,
                weight: 60.0,
                duration_workout_seconds: Some(120),
                duration_rest_seconds: None,
            },
        ],
        feedback: Some("felt strong".to_owned()),
        like: Some(true),
    }
}
