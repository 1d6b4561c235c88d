use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::exercise::ExerciseUser;
use crate::domain::model::Model;
use crate::domain::workout_user::WorkoutUser;

/// Stored field names used in update specs
pub const CURRENT_WORKOUT: &str = "currentWorkout";
pub const WORKOUTS: &str = "workouts";
pub const EXERCISES: &str = "exercises";
pub const RECEIVED_WORKOUTS: &str = "receivedWorkouts";
pub const UNSEEN_RECEIVED_WORKOUTS: &str = "unseenReceivedWorkouts";

/// Root user record, keyed by username.
///
/// Every workout id listed in an exercise's `workouts` map must also be a key
/// of `workouts`. Storage does not enforce this; managers keep it in sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,

    #[serde(default)]
    pub current_workout: Option<String>,

    /// Workout id -> per-user workout rollup
    #[serde(default)]
    pub workouts: IndexMap<String, WorkoutUser>,

    /// Exercise id -> exercise definition
    #[serde(default)]
    pub exercises: IndexMap<String, ExerciseUser>,

    /// Workout id -> shared workout addressed to this user
    #[serde(default)]
    pub received_workouts: IndexMap<String, ReceivedWorkoutMeta>,

    #[serde(default)]
    pub unseen_received_workouts: u32,

    #[serde(default)]
    pub user_preferences: UserPreferences,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    /// Raise an exercise's default weight to the routine weight on restart
    pub update_default_weight_on_restart: bool,
    pub metric_units: bool,
}

/// A workout shared to this user by someone else
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivedWorkoutMeta {
    pub workout_name: String,
    pub sender: String,
    pub date_sent: DateTime<Utc>,
    #[serde(default)]
    pub seen: bool,
}

impl User {
    pub fn new(username: String) -> Self {
        Self {
            username,
            current_workout: None,
            workouts: IndexMap::new(),
            exercises: IndexMap::new(),
            received_workouts: IndexMap::new(),
            unseen_received_workouts: 0,
            user_preferences: UserPreferences::default(),
        }
    }

    pub fn custom_exercise_count(&self) -> usize {
        self.exercises.values().filter(|e| e.is_custom()).count()
    }

    /// Mark every received workout seen and zero the unseen counter.
    /// Returns how many entries flipped from unseen to seen.
    pub fn set_all_received_workouts_seen(&mut self) -> usize {
        let mut flipped = 0;
        for meta in self.received_workouts.values_mut() {
            if !meta.seen {
                meta.seen = true;
                flipped += 1;
            }
        }
        self.unseen_received_workouts = 0;
        flipped
    }

    pub fn exercises_map(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(&self.exercises)
    }

    pub fn received_workouts_map(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(&self.received_workouts)
    }
}

impl Model for User {}

#[cfg(test)]
mod tests {
    use super::*;

    fn received(seen: bool) -> ReceivedWorkoutMeta {
        ReceivedWorkoutMeta {
            workout_name: "Shared".to_string(),
            sender: "bob".to_string(),
            date_sent: Utc::now(),
            seen,
        }
    }

    #[test]
    fn test_set_all_received_workouts_seen() {
        let mut user = User::new("alice".to_string());
        user.received_workouts.insert("w1".to_string(), received(true));
        user.received_workouts.insert("w2".to_string(), received(false));
        user.received_workouts.insert("w3".to_string(), received(false));
        user.unseen_received_workouts = 2;

        assert_eq!(user.set_all_received_workouts_seen(), 2);
        assert!(user.received_workouts.values().all(|m| m.seen));
        assert_eq!(user.unseen_received_workouts, 0);
    }

    #[test]
    fn test_missing_optional_fields_deserialize_to_defaults() {
        let user: User = serde_json::from_str(r#"{"username": "alice"}"#).unwrap();
        assert_eq!(user, User::new("alice".to_string()));
    }

    #[test]
    fn test_user_map_uses_stored_field_names() {
        let map = User::new("alice".to_string()).as_map().unwrap();
        for key in [CURRENT_WORKOUT, WORKOUTS, EXERCISES, RECEIVED_WORKOUTS, UNSEEN_RECEIVED_WORKOUTS] {
            assert!(map.contains_key(key), "missing {}", key);
        }
    }
}
