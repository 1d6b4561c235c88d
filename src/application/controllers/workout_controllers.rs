// src/application/controllers/workout_controllers.rs

use serde_json::Value;
use std::sync::Arc;

use super::ApiRequestController;
use crate::application::request::{field, string_field, RequestBody, RequestFields};
use crate::domain::{Model, Routine, Workout};
use crate::error::AppResult;
use crate::managers::{
    CopyWorkoutManager, NewWorkoutManager, RenameWorkoutManager, RestartWorkoutManager,
};

pub struct NewWorkoutController {
    manager: Arc<NewWorkoutManager>,
}

impl NewWorkoutController {
    pub fn new(manager: Arc<NewWorkoutManager>) -> Self {
        Self { manager }
    }
}

impl ApiRequestController for NewWorkoutController {
    fn name(&self) -> &'static str {
        "NewWorkoutController"
    }

    fn required_keys(&self) -> &'static [&'static str] {
        &[
            RequestFields::ACTIVE_USER,
            RequestFields::WORKOUT_NAME,
            RequestFields::ROUTINE,
        ]
    }

    fn handle(&self, body: &RequestBody) -> AppResult<Value> {
        let active_user = string_field(body, RequestFields::ACTIVE_USER)?;
        let workout_name = string_field(body, RequestFields::WORKOUT_NAME)?;
        let routine: Routine = field(body, RequestFields::ROUTINE)?;

        self.manager
            .new_workout(&active_user, &workout_name, routine)?
            .as_value()
    }
}

pub struct RenameWorkoutController {
    manager: Arc<RenameWorkoutManager>,
}

impl RenameWorkoutController {
    pub fn new(manager: Arc<RenameWorkoutManager>) -> Self {
        Self { manager }
    }
}

impl ApiRequestController for RenameWorkoutController {
    fn name(&self) -> &'static str {
        "RenameWorkoutController"
    }

    fn required_keys(&self) -> &'static [&'static str] {
        &[
            RequestFields::ACTIVE_USER,
            RequestFields::WORKOUT_ID,
            RequestFields::WORKOUT_NAME,
        ]
    }

    fn handle(&self, body: &RequestBody) -> AppResult<Value> {
        let active_user = string_field(body, RequestFields::ACTIVE_USER)?;
        let workout_id = string_field(body, RequestFields::WORKOUT_ID)?;
        let workout_name = string_field(body, RequestFields::WORKOUT_NAME)?;

        self.manager
            .rename_workout(&active_user, &workout_id, &workout_name)?
            .as_value()
    }
}

pub struct RestartWorkoutController {
    manager: Arc<RestartWorkoutManager>,
}

impl RestartWorkoutController {
    pub fn new(manager: Arc<RestartWorkoutManager>) -> Self {
        Self { manager }
    }
}

impl ApiRequestController for RestartWorkoutController {
    fn name(&self) -> &'static str {
        "RestartWorkoutController"
    }

    fn required_keys(&self) -> &'static [&'static str] {
        &[RequestFields::ACTIVE_USER, RequestFields::WORKOUT]
    }

    fn handle(&self, body: &RequestBody) -> AppResult<Value> {
        let active_user = string_field(body, RequestFields::ACTIVE_USER)?;
        let workout: Workout = field(body, RequestFields::WORKOUT)?;

        self.manager.restart_workout(&active_user, workout)?.as_value()
    }
}

pub struct CopyWorkoutController {
    manager: Arc<CopyWorkoutManager>,
}

impl CopyWorkoutController {
    pub fn new(manager: Arc<CopyWorkoutManager>) -> Self {
        Self { manager }
    }
}

impl ApiRequestController for CopyWorkoutController {
    fn name(&self) -> &'static str {
        "CopyWorkoutController"
    }

    fn required_keys(&self) -> &'static [&'static str] {
        &[
            RequestFields::ACTIVE_USER,
            RequestFields::WORKOUT,
            RequestFields::WORKOUT_NAME,
        ]
    }

    fn handle(&self, body: &RequestBody) -> AppResult<Value> {
        let active_user = string_field(body, RequestFields::ACTIVE_USER)?;
        let new_workout_name = string_field(body, RequestFields::WORKOUT_NAME)?;
        let old_workout: Workout = field(body, RequestFields::WORKOUT)?;

        self.manager
            .copy_workout(&active_user, &new_workout_name, old_workout)?
            .as_value()
    }
}
