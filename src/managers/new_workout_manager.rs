// src/managers/new_workout_manager.rs
use chrono::{DateTime, Utc};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use super::require_user;
use crate::domain::user::entity::{CURRENT_WORKOUT, EXERCISES, WORKOUTS};
use crate::domain::workout_helper::{find_most_frequent_focus, update_user_exercises};
use crate::domain::{
    validate_new_workout_input, validate_workout, Model, Routine, User, UserWithWorkout, Workout,
    WorkoutUser,
};
use crate::error::AppResult;
use crate::metrics::{scoped, Metrics};
use crate::repositories::{TransactionRepository, UpdateItemData, UserRepository, WriteOperation};

pub struct NewWorkoutManager {
    user_repo: Arc<dyn UserRepository>,
    transaction_repo: Arc<dyn TransactionRepository>,
    metrics: Arc<dyn Metrics>,
}

impl NewWorkoutManager {
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

    /// Create a workout for `active_user` and make it their current one
    pub fn new_workout(
        &self,
        active_user: &str,
        workout_name: &str,
        routine: Routine,
    ) -> AppResult<UserWithWorkout> {
        scoped(self.metrics.as_ref(), "NewWorkoutManager.new_workout", || {
            let mut user = require_user(self.user_repo.as_ref(), active_user)?;
            let (workout, operations) =
                build_new_workout(&mut user, workout_name, routine, Utc::now())?;

            self.transaction_repo.execute_write_transaction(&operations)?;
            Ok(UserWithWorkout::new(user, workout))
        })
    }
}

/// Shared construction path for new and copied workouts.
///
/// Validates, mutates `user` in place and returns the workout together with
/// the writes that persist both records. Nothing is written here.
pub(crate) fn build_new_workout(
    user: &mut User,
    workout_name: &str,
    routine: Routine,
    now: DateTime<Utc>,
) -> AppResult<(Workout, Vec<WriteOperation>)> {
    validate_new_workout_input(workout_name, user, &routine)?;

    let workout_id = Uuid::new_v4().to_string();
    let workout_name = workout_name.trim();

    let mut workout = Workout::new(
        workout_id.clone(),
        workout_name.to_string(),
        user.username.clone(),
        now,
        routine,
    );
    workout.most_frequent_focus = find_most_frequent_focus(user, &workout.routine);
    validate_workout(&workout)?;

    let workout_user = WorkoutUser::new(workout_name.to_string(), now);
    let workout_user_value = workout_user.as_value()?;
    user.workouts.insert(workout_id.clone(), workout_user);
    user.current_workout = Some(workout_id.clone());
    update_user_exercises(user, &workout.routine, &workout_id, workout_name);

    let update_user = UpdateItemData::new(user.username.as_str())
        .set(CURRENT_WORKOUT, json!(workout_id))
        .set_entry(WORKOUTS, &workout_id, workout_user_value)
        .set(EXERCISES, user.exercises_map()?);

    let operations = vec![
        WriteOperation::update_user(update_user),
        WriteOperation::put_workout(&workout)?,
    ];
    Ok((workout, operations))
}
