// src/managers/mod.rs
//
// Managers - one per use case
//
// RESPONSIBILITIES:
// - Load entity state through the repositories
// - Run the validators before any mutation
// - Mutate the in-memory domain model and its derived fields
// - Submit every multi-record change as ONE atomic transaction
// - Wrap each use case in a telemetry scope
//
// Managers never catch errors except to close the telemetry scope.

pub mod copy_workout_manager;
pub mod get_user_data_manager;
pub mod new_exercise_manager;
pub mod new_user_manager;
pub mod new_workout_manager;
pub mod rename_workout_manager;
pub mod restart_workout_manager;
pub mod set_all_received_workouts_seen_manager;


pub use copy_workout_manager::CopyWorkoutManager;
pub use get_user_data_manager::GetUserDataManager;
pub use new_exercise_manager::NewExerciseManager;
pub use new_user_manager::NewUserManager;
pub use new_workout_manager::NewWorkoutManager;
pub use rename_workout_manager::RenameWorkoutManager;
pub use restart_workout_manager::RestartWorkoutManager;
pub use set_all_received_workouts_seen_manager::SetAllReceivedWorkoutsSeenManager;

use crate::domain::User;
use crate::error::{AppError, AppResult};
use crate::repositories::UserRepository;

/// Load a user that must already exist
pub(crate) fn require_user(user_repo: &dyn UserRepository, username: &str) -> AppResult<User> {
    user_repo
        .get_user(username)?
        .ok_or_else(|| AppError::user_not_found(username))
}
