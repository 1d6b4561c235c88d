// src/managers/copy_workout_manager.rs
use chrono::Utc;
use std::sync::Arc;

use super::new_workout_manager::build_new_workout;
use super::require_user;
use crate::domain::{UserWithWorkout, Workout};
use crate::error::AppResult;
use crate::metrics::{scoped, Metrics};
use crate::repositories::{TransactionRepository, UserRepository};

pub struct CopyWorkoutManager {
    user_repo: Arc<dyn UserRepository>,
    transaction_repo: Arc<dyn TransactionRepository>,
    metrics: Arc<dyn Metrics>,
}

impl CopyWorkoutManager {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        transaction_repo: Arc<dyn TransactionRepository>,
        metrics: Arc<dyn Metrics>,
    ) -> Self {
        Self {
            user_repo,
            transaction_repo,
            metrics,
        }
    }

    /// Create an independent workout owned by `active_user` from the routine
    /// of `old_workout`. Progress on the old workout is not carried over.
    pub fn copy_workout(
        &self,
        active_user: &str,
        new_workout_name: &str,
        old_workout: Workout,
    ) -> AppResult<UserWithWorkout> {
        scoped(self.metrics.as_ref(), "CopyWorkoutManager.copy_workout", || {
            let mut user = require_user(self.user_repo.as_ref(), active_user)?;

            let mut routine = old_workout.routine;
            routine.reset_completed();

            let (workout, operations) =
                build_new_workout(&mut user, new_workout_name, routine, Utc::now())?;
            self.transaction_repo.execute_write_transaction(&operations)?;

            log::debug!(
                "Copied workout {} into {} for {}",
                old_workout.workout_id,
                workout.workout_id,
                active_user
            );
            Ok(UserWithWorkout::new(user, workout))
        })
    }
}
