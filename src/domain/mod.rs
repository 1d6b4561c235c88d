// src/domain/mod.rs
//
// Domain Root - in-memory representations of persisted entities, their
// invariants, and the derived-field helpers managers rely on.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod exercise;
pub mod model;
pub mod responses;
pub mod user;
pub mod workout;
pub mod workout_helper;
pub mod workout_user;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use model::Model;

// Exercise Domain
pub use exercise::{default_exercises, validate_new_exercise, ExerciseUser, FOCUS_LIST};

// User Domain
pub use user::{ReceivedWorkoutMeta, User, UserPreferences};

// Workout Domain
pub use workout::{
    validate_new_workout_input, validate_routine, validate_workout, validate_workout_name,
    ExerciseRoutine, Routine, RoutineDay, RoutineWeek, Workout,
};
pub use workout_user::WorkoutUser;

// Responses
pub use responses::{ExerciseUserResponse, UserResponse, UserWithWorkout};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    /// User input rejected by a validator. The message is shown to the client.
    #[error("{0}")]
    Validation(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Invalid update: {0}")]
    InvalidUpdate(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;

/// Collapse accumulated validator messages: none means valid
pub(crate) fn into_validation_result(errors: Vec<String>) -> DomainResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation(errors.join("\n")))
    }
}
