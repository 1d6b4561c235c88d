// src/managers/rename_workout_manager.rs
use serde_json::json;
use std::sync::Arc;

use super::require_user;
use crate::domain::user::entity::{EXERCISES, WORKOUTS};
use crate::domain::workout::entity::WORKOUT_NAME;
use crate::domain::workout_helper::rename_workout_in_exercises;
use crate::domain::{validate_workout_name, Model, User};
use crate::error::{AppError, AppResult};
use crate::metrics::{scoped, Metrics};
use crate::repositories::{
    TransactionRepository, UpdateItemData, UserRepository, WorkoutRepository, WriteOperation,
};

pub struct RenameWorkoutManager {
    user_repo: Arc<dyn UserRepository>,
    workout_repo: Arc<dyn WorkoutRepository>,
    transaction_repo: Arc<dyn TransactionRepository>,
    metrics: Arc<dyn Metrics>,
}

impl RenameWorkoutManager {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        workout_repo: Arc<dyn WorkoutRepository>,
        transaction_repo: Arc<dyn TransactionRepository>,
        metrics: Arc<dyn Metrics>,
    ) -> Self {
        Self {
            user_repo,
            workout_repo,
            transaction_repo,
            metrics,
        }
    }

    /// Rename a workout and every denormalized copy of its name
    pub fn rename_workout(
        &self,
        active_user: &str,
        workout_id: &str,
        new_workout_name: &str,
    ) -> AppResult<User> {
        scoped(self.metrics.as_ref(), "RenameWorkoutManager.rename_workout", || {
            let mut user = require_user(self.user_repo.as_ref(), active_user)?;
            let mut workout = self
                .workout_repo
                .get_workout(workout_id)?
                .ok_or_else(|| AppError::workout_not_found(workout_id))?;

            validate_workout_name(new_workout_name, &user, Some(workout_id))?;
            let new_name = new_workout_name.trim().to_string();

            let workout_user = user
                .workouts
                .get_mut(workout_id)
                .ok_or_else(|| AppError::workout_not_found(workout_id))?;
            workout_user.workout_name = new_name.clone();
            let workout_user_value = workout_user.as_value()?;

            workout.workout_name = new_name.clone();
            let touched = rename_workout_in_exercises(&mut user, workout_id, &new_name);
            log::debug!("Renamed workout {} in {} exercises", workout_id, touched);

            let update_user = UpdateItemData::new(active_user)
                .set_entry(WORKOUTS, workout_id, workout_user_value)
                .set(EXERCISES, user.exercises_map()?);
            let update_workout =
                UpdateItemData::new(workout_id).set(WORKOUT_NAME, json!(workout.workout_name));

            self.transaction_repo.execute_write_transaction(&[
                WriteOperation::update_user(update_user),
                WriteOperation::update_workout(update_workout),
            ])?;
            Ok(user)
        })
    }
}
