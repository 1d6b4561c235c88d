//! Workout invariants:
//!
//! 1. `workout_id` is generated once and never changes
//! 2. `current_week`/`current_day` point inside the routine (0/0 on creation and restart)
//! 3. Routine weeks and days are 0-based and contiguous
//! 4. Workout names are non-blank and unique per user (case-insensitive)

pub mod entity;
pub mod invariants;
pub mod routine;

pub use entity::Workout;
pub use invariants::{
    validate_new_workout_input, validate_routine, validate_workout, validate_workout_name,
    MAX_DAYS_PER_WEEK, MAX_EXERCISES_PER_DAY, MAX_WEEKS, MAX_WORKOUTS, MAX_WORKOUT_NAME_LENGTH,
};
pub use routine::{ExerciseRoutine, Routine, RoutineDay, RoutineWeek};
