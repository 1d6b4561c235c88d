//! Exercise invariants:
//!
//! 1. Exercise names are non-blank and unique per user (case-insensitive)
//! 2. Every exercise carries at least one recognized focus
//! 3. A user holds at most `MAX_CUSTOM_EXERCISES` custom exercises
//! 4. `workouts` maps workout id to the workout's current display name

pub mod catalog;
pub mod entity;
pub mod invariants;

pub use catalog::default_exercises;
pub use entity::{ExerciseUser, DEFAULT_VIDEO_VALUE, FOCUS_LIST};
pub use invariants::{validate_new_exercise, MAX_CUSTOM_EXERCISES, MAX_EXERCISE_NAME_LENGTH};
