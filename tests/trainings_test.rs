// ABOUTME: Integration tests for the training store
// ABOUTME: Covers id assignment, hard delete semantics, and listing fidelity
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use uuid::Uuid;
use workout_tracker::errors::StoreError;

#[tokio::test]
async fn create_overwrites_caller_supplied_id() {
    let (service, _dir) = common::create_test_service().await;

    let mut training = common::sample_training("alice", 1);
    training.id = Uuid::new_v4();
    let supplied = training.id;

    let assigned = service.create_training(training).await.unwrap();
    assert_ne!(assigned, supplied);

    let listed = service.list_trainings("alice").await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, assigned);
}

#[tokio::test]
async fn delete_is_not_idempotent_silent() {
    let (service, _dir) = common::create_test_service().await;

    let id = service
        .create_training(common::sample_training("alice", 1))
        .await
        .unwrap();

    service.delete_training(id).await.expect("first delete");

    let err = service.delete_training(id).await.unwrap_err();
    assert!(matches!(err, StoreError::TrainingNotFound { id: missing } if missing == id));
    assert_eq!(err.http_status(), 404);
}

#[tokio::test]
async fn delete_unknown_id_is_not_found() {
    let (service, _dir) = common::create_test_service().await;

    let err = service.delete_training(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, StoreError::TrainingNotFound { .. }));
}

#[tokio::test]
async fn list_for_unknown_user_is_empty_not_an_error() {
    let (service, _dir) = common::create_test_service().await;

    let listed = service.list_trainings("nobody").await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn listing_round_trips_every_field_in_insertion_order() {
    let (service, _dir) = common::create_test_service().await;

    let mut expected = Vec::new();
    for number in 1..=3 {
        let training = common::sample_training("alice", number);
        let id = service.create_training(training.clone()).await.unwrap();
        let mut stored = training;
        stored.id = id;
        expected.push(stored);
    }

    let listed = service.list_trainings("alice").await.unwrap();
    assert_eq!(listed, expected);

    // Exercise order is meaningful and must survive the round trip
    let kinds: Vec<&str> = listed[0]
        .exercises
        .iter()
        .map(|e| e.exercise_type.as_str())
        .collect();
    assert_eq!(kinds, ["Pull up", "Push up", "Squat"]);
}

#[tokio::test]
async fn empty_exercise_sequence_is_valid() {
    let (service, _dir) = common::create_test_service().await;

    let mut training = common::sample_training("alice", 1);
    training.exercises.clear();
    training.total_workout_seconds = None;
    training.feedback = None;
    training.like = None;

    let id = service.create_training(training).await.unwrap();
    let listed = service.list_trainings("alice").await.unwrap();
    assert_eq!(listed[0].id, id);
    assert!(listed[0].exercises.is_empty());
    assert!(listed[0].total_workout_seconds.is_none());
}

#[tokio::test]
async fn trainings_may_reference_unregistered_users() {
    let (service, _dir) = common::create_test_service().await;

    // No referential integrity: "ghost" was never registered
    let id = service
        .create_training(common::sample_training("ghost", 1))
        .await
        .unwrap();

    let listed = service.list_trainings("ghost").await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);
}

#[tokio::test]
async fn listings_are_scoped_to_the_owner() {
    let (service, _dir) = common::create_test_service().await;

    service
        .create_training(common::sample_training("alice", 1))
        .await
        .unwrap();
    service
        .create_training(common::sample_training("bob", 1))
        .await
        .unwrap();

    assert_eq!(service.list_trainings("alice").await.unwrap().len(), 1);
    assert_eq!(service.list_trainings("bob").await.unwrap().len(), 1);
    assert_eq!(
        service.list_trainings("alice").await.unwrap()[0].username,
        "alice"
    );
}
