// src/application/controllers/exercise_controllers.rs

use serde_json::Value;
use std::sync::Arc;

use super::ApiRequestController;
use crate::application::request::{field, string_field, RequestBody, RequestFields};
use crate::domain::Model;
use crate::error::AppResult;
use crate::managers::NewExerciseManager;

pub struct NewExerciseController {
    manager: Arc<NewExerciseManager>,
}

impl NewExerciseController {
    pub fn new(manager: Arc<NewExerciseManager>) -> Self {
        Self { manager }
    }
}

impl ApiRequestController for NewExerciseController {
    fn name(&self) -> &'static str {
        "NewExerciseController"
    }

    fn required_keys(&self) -> &'static [&'static str] {
        &[
            RequestFields::ACTIVE_USER,
            RequestFields::EXERCISE_NAME,
            RequestFields::FOCUSES,
        ]
    }

    fn handle(&self, body: &RequestBody) -> AppResult<Value> {
        let active_user = string_field(body, RequestFields::ACTIVE_USER)?;
        let exercise_name = string_field(body, RequestFields::EXERCISE_NAME)?;
        let focuses: Vec<String> = field(body, RequestFields::FOCUSES)?;

        self.manager
            .new_exercise(&active_user, &exercise_name, focuses)?
            .as_value()
    }
}
