// src/application/state.rs

use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::managers::{
    CopyWorkoutManager, GetUserDataManager, NewExerciseManager, NewUserManager,
    NewWorkoutManager, RenameWorkoutManager, RestartWorkoutManager,
    SetAllReceivedWorkoutsSeenManager,
};
use crate::metrics::Metrics;
use crate::repositories::{
    SqliteTransactionRepository, SqliteUserRepository, SqliteWorkoutRepository,
    TransactionRepository, UserRepository, WorkoutRepository,
};

/// Every manager, wired once at startup.
/// All fields are Arc-wrapped for sharing across request tasks.
pub struct AppState {
    pub new_workout_manager: Arc<NewWorkoutManager>,
    pub rename_workout_manager: Arc<RenameWorkoutManager>,
    pub restart_workout_manager: Arc<RestartWorkoutManager>,
    pub copy_workout_manager: Arc<CopyWorkoutManager>,
    pub set_all_received_workouts_seen_manager: Arc<SetAllReceivedWorkoutsSeenManager>,
    pub get_user_data_manager: Arc<GetUserDataManager>,
    pub new_exercise_manager: Arc<NewExerciseManager>,
}

impl AppState {
    /// SQLite-backed state over an initialized pool
    pub fn new(pool: Arc<ConnectionPool>, metrics: Arc<dyn Metrics>) -> Self {
        Self::from_repositories(
            Arc::new(SqliteUserRepository::new(pool.clone())),
            Arc::new(SqliteWorkoutRepository::new(pool.clone())),
            Arc::new(SqliteTransactionRepository::new(pool)),
            metrics,
        )
    }

    pub fn from_repositories(
        user_repo: Arc<dyn UserRepository>,
        workout_repo: Arc<dyn WorkoutRepository>,
        transaction_repo: Arc<dyn TransactionRepository>,
        metrics: Arc<dyn Metrics>,
    ) -> Self {
        let new_user_manager = Arc::new(NewUserManager::new(user_repo.clone(), metrics.clone()));

        Self {
            new_workout_manager: Arc::new(NewWorkoutManager::new(
                user_repo.clone(),
                transaction_repo.clone(),
                metrics.clone(),
            )),
            rename_workout_manager: Arc::new(RenameWorkoutManager::new(
                user_repo.clone(),
                workout_repo,
                transaction_repo.clone(),
                metrics.clone(),
            )),
            restart_workout_manager: Arc::new(RestartWorkoutManager::new(
                user_repo.clone(),
                transaction_repo.clone(),
                metrics.clone(),
            )),
            copy_workout_manager: Arc::new(CopyWorkoutManager::new(
                user_repo.clone(),
                transaction_repo,
                metrics.clone(),
            )),
            set_all_received_workouts_seen_manager: Arc::new(
                SetAllReceivedWorkoutsSeenManager::new(user_repo.clone(), metrics.clone()),
            ),
            get_user_data_manager: Arc::new(GetUserDataManager::new(
                user_repo.clone(),
                new_user_manager,
                metrics.clone(),
            )),
            new_exercise_manager: Arc::new(NewExerciseManager::new(user_repo, metrics)),
        }
    }
}
