// src/managers/new_exercise_manager.rs
use std::sync::Arc;
use uuid::Uuid;

use super::require_user;
use crate::domain::exercise::DEFAULT_VIDEO_VALUE;
use crate::domain::user::entity::EXERCISES;
use crate::domain::{validate_new_exercise, ExerciseUser, ExerciseUserResponse, Model};
use crate::error::AppResult;
use crate::metrics::{scoped, Metrics};
use crate::repositories::{UpdateItemData, UserRepository};

pub struct NewExerciseManager {
    user_repo: Arc<dyn UserRepository>,
    metrics: Arc<dyn Metrics>,
}

impl NewExerciseManager {
    pub fn new(user_repo: Arc<dyn UserRepository>, metrics: Arc<dyn Metrics>) -> Self {
        Self { user_repo, metrics }
    }

    /// Add a custom exercise to the user's exercise map
    pub fn new_exercise(
        &self,
        active_user: &str,
        exercise_name: &str,
        focuses: Vec<String>,
    ) -> AppResult<ExerciseUserResponse> {
        scoped(self.metrics.as_ref(), "NewExerciseManager.new_exercise", || {
            let user = require_user(self.user_repo.as_ref(), active_user)?;
            validate_new_exercise(&user, exercise_name, &focuses)?;

            let exercise_id = Uuid::new_v4().to_string();
            let exercise = ExerciseUser::new(
                exercise_name.trim().to_string(),
                DEFAULT_VIDEO_VALUE.to_string(),
                focuses,
                false,
            );

            let update = UpdateItemData::new(active_user).set_entry(
                EXERCISES,
                &exercise_id,
                exercise.as_value()?,
            );
            self.user_repo.update_user(&update)?;

            Ok(ExerciseUserResponse {
                exercise_id,
                exercise,
            })
        })
    }
}
