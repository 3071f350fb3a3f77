// ABOUTME: Domain records for users, training sessions, and embedded exercises
// ABOUTME: Defines the persisted document layout and server-side id generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain data structures shared by the store and its callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Well-known exercise labels.
///
/// The set is open: any label a caller supplies is stored as-is. These
/// constants only cover the exercises the mobile client ships with.
pub mod exercise_types {
    /// Bodyweight pull up
    pub const PULL_UP: &str = "Pull up";
    /// Bodyweight push up
    pub const PUSH_UP: &str = "Push up";
}

/// A registered account.
///
/// Created once by registration and never mutated afterwards; there is no
/// delete path. The `password_hash` field holds the one-way hash produced
/// at the authentication boundary (see [`crate::auth`]) — plaintext
/// passwords never reach the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, generated server-side at registration
    pub id: Uuid,
    /// Unique account name; identity of the account
    pub username: String,
    /// One-way password hash
    pub password_hash: String,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a freshly generated id.
    #[must_use]
    pub fn new(username: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

/// One training session belonging to a user.
///
/// Persisted as a self-describing document. The `username` field is a
/// plain foreign key — the store enforces no referential integrity, so a
/// training may outlive (or precede) its owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Training {
    /// Store-assigned identifier; any caller-supplied value is replaced
    /// when the record is inserted
    #[serde(default)]
    pub id: Uuid,
    /// Owning account name
    pub username: String,
    /// When the session took place
    pub date: DateTime<Utc>,
    /// Total load moved during the session
    pub tonnage: f64,
    /// Session counter
    pub number: u32,
    /// Total time under load, in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_workout_seconds: Option<i64>,
    /// Total rest time, in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_rest_seconds: Option<i64>,
    /// Performed exercises, in order; an empty sequence is valid
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    /// Free-text feedback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    /// Whether the user liked the session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub like: Option<bool>,
}

/// One exercise inside a training session.
///
/// Owned exclusively by its training record; it has no identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise label, e.g. [`exercise_types::PULL_UP`]
    #[serde(rename = "type")]
    pub exercise_type: String,
    /// Repetitions performed
    pub count: u32,
    /// Load in the app's weight unit
    pub weight: f64,
    /// Time under load, in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_workout_seconds: Option<i64>,
    /// Rest after the exercise, in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_rest_seconds: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_training() -> Training {
        Training {
            id: Uuid::new_v4(),
            username: "alice".into(),
            date: Utc::now(),
            tonnage: 1250.0,
            number: 3,
            total_workout_seconds: Some(1800),
            total_rest_seconds: None,
            exercises: vec![
                Exercise {
                    exercise_type: exercise_types::PULL_UP.into(),
                    count: 10,
                    weight: 0.0,
                    duration_workout_seconds: Some(45),
                    duration_rest_seconds: Some(90),
                },
                Exercise {
                    exercise_type: exercise_types::PUSH_UP.into(),
                    count: 20,
                    weight: 5.0,
                    duration_workout_seconds: None,
                    duration_rest_seconds: None,
                },
            ],
            feedback: Some("solid session".into()),
            like: Some(true),
        }
    }

    #[test]
    fn user_new_generates_distinct_ids() {
        let a = User::new("alice".into(), "hash-a".into());
        let b = User::new("alice".into(), "hash-b".into());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn exercise_type_serializes_under_type_key() {
        let exercise = Exercise {
            exercise_type: exercise_types::PULL_UP.into(),
            count: 5,
            weight: 0.0,
            duration_workout_seconds: None,
            duration_rest_seconds: None,
        };
        let json = serde_json::to_value(&exercise).unwrap();
        assert_eq!(json["type"], "Pull up");
        assert!(json.get("duration_workout_seconds").is_none());
    }

    #[test]
    fn training_document_round_trips_with_exercise_order() {
        let training = sample_training();
        let doc = serde_json::to_string(&training).unwrap();
        let decoded: Training = serde_json::from_str(&doc).unwrap();
        assert_eq!(decoded, training);
        assert_eq!(decoded.exercises[0].exercise_type, "Pull up");
        assert_eq!(decoded.exercises[1].exercise_type, "Push up");
    }

    #[test]
    fn training_without_id_defaults_to_nil() {
        let json = r#"{"username":"bob","date":"2024-05-01T10:00:00Z","tonnage":0.0,"number":1}"#;
        let decoded: Training = serde_json::from_str(json).unwrap();
        assert!(decoded.id.is_nil());
        assert!(decoded.exercises.is_empty());
        assert!(decoded.like.is_none());
    }
}
