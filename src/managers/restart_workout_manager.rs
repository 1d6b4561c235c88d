// src/managers/restart_workout_manager.rs
use serde_json::json;
use std::sync::Arc;

use super::require_user;
use crate::domain::user::entity::{EXERCISES, WORKOUTS};
use crate::domain::workout::entity::{CURRENT_DAY, CURRENT_WEEK, ROUTINE};
use crate::domain::workout_helper::restart_routine;
use crate::domain::{validate_routine, Model, UserWithWorkout, Workout};
use crate::error::{AppError, AppResult};
use crate::metrics::{scoped, Metrics};
use crate::repositories::{TransactionRepository, UpdateItemData, UserRepository, WriteOperation};

pub struct RestartWorkoutManager {
    user_repo: Arc<dyn UserRepository>,
    transaction_repo: Arc<dyn TransactionRepository>,
    metrics: Arc<dyn Metrics>,
}

impl RestartWorkoutManager {
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

    /// Fold the workout's completion state into the user's rollup, then
    /// reset the routine and move back to week 0, day 0.
    ///
    /// `workout` is the client's current copy, routine completion included.
    pub fn restart_workout(
        &self,
        active_user: &str,
        mut workout: Workout,
    ) -> AppResult<UserWithWorkout> {
        scoped(self.metrics.as_ref(), "RestartWorkoutManager.restart_workout", || {
            let mut user = require_user(self.user_repo.as_ref(), active_user)?;
            let workout_id = workout.workout_id.clone();

            let mut workout_user = user
                .workouts
                .get(&workout_id)
                .cloned()
                .ok_or_else(|| AppError::workout_not_found(&workout_id))?;
            // client-supplied routine
            validate_routine(&workout.routine, &user)?;

            let update_default_weight = user.user_preferences.update_default_weight_on_restart;
            restart_routine(
                &mut workout.routine,
                &mut workout_user,
                &mut user.exercises,
                update_default_weight,
            );
            workout_user.times_completed += 1;
            workout.reset_position();

            let update_workout = UpdateItemData::new(workout_id.as_str())
                .set(CURRENT_DAY, json!(workout.current_day))
                .set(CURRENT_WEEK, json!(workout.current_week))
                .set(ROUTINE, serde_json::to_value(&workout.routine)?);
            let update_user = UpdateItemData::new(active_user)
                .set_entry(WORKOUTS, &workout_id, workout_user.as_value()?)
                .set(EXERCISES, user.exercises_map()?);
            user.workouts.insert(workout_id, workout_user);

            self.transaction_repo.execute_write_transaction(&[
                WriteOperation::update_user(update_user),
                WriteOperation::update_workout(update_workout),
            ])?;
            Ok(UserWithWorkout::new(user, workout))
        })
    }
}
