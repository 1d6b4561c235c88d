// src/domain/exercise/catalog.rs
//
// Default exercises every new user is provisioned with

use indexmap::IndexMap;
use uuid::Uuid;

use super::entity::{ExerciseUser, DEFAULT_VIDEO_VALUE};

const DEFAULT_EXERCISES: &[(&str, &[&str])] = &[
    ("Bench Press", &["Chest", "Triceps"]),
    ("Squat", &["Legs"]),
    ("Deadlift", &["Back", "Legs"]),
    ("Overhead Press", &["Shoulders", "Triceps"]),
    ("Barbell Row", &["Back", "Biceps"]),
    ("Pull Up", &["Back", "Biceps"]),
    ("Dumbbell Curl", &["Biceps"]),
    ("Tricep Dip", &["Triceps", "Chest"]),
    ("Lunge", &["Legs"]),
    ("Plank", &["Core"]),
    ("Running", &["Cardio"]),
];

/// Build the default exercise map keyed by freshly generated ids
pub fn default_exercises() -> IndexMap<String, ExerciseUser> {
    DEFAULT_EXERCISES
        .iter()
        .map(|(name, focuses)| {
            let exercise = ExerciseUser::new(
                name.to_string(),
                DEFAULT_VIDEO_VALUE.to_string(),
                focuses.iter().map(|f| f.to_string()).collect(),
                true,
            );
            (Uuid::new_v4().to_string(), exercise)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::exercise::FOCUS_LIST;

    #[test]
    fn test_default_exercises_are_marked_default() {
        let exercises = default_exercises();
        assert_eq!(exercises.len(), DEFAULT_EXERCISES.len());
        assert!(exercises.values().all(|e| e.default_exercise));
    }

    #[test]
    fn test_default_exercises_use_recognized_focuses() {
        for exercise in default_exercises().values() {
            assert!(!exercise.focuses.is_empty());
            for focus in &exercise.focuses {
                assert!(FOCUS_LIST.contains(&focus.as_str()), "unknown focus {}", focus);
            }
        }
    }
}
