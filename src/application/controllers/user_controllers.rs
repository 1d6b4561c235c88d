// src/application/controllers/user_controllers.rs

use serde_json::Value;
use std::sync::Arc;

use super::ApiRequestController;
use crate::application::request::{string_field, RequestBody, RequestFields};
use crate::domain::Model;
use crate::error::AppResult;
use crate::managers::{GetUserDataManager, SetAllReceivedWorkoutsSeenManager};

pub const ALL_SEEN_MESSAGE: &str = "All workouts set to seen successfully.";

pub struct SetAllReceivedWorkoutsSeenController {
    manager: Arc<SetAllReceivedWorkoutsSeenManager>,
}

impl SetAllReceivedWorkoutsSeenController {
    pub fn new(manager: Arc<SetAllReceivedWorkoutsSeenManager>) -> Self {
        Self { manager }
    }
}

impl ApiRequestController for SetAllReceivedWorkoutsSeenController {
    fn name(&self) -> &'static str {
        "SetAllReceivedWorkoutsSeenController"
    }

    fn required_keys(&self) -> &'static [&'static str] {
        &[RequestFields::ACTIVE_USER]
    }

    fn handle(&self, body: &RequestBody) -> AppResult<Value> {
        let active_user = string_field(body, RequestFields::ACTIVE_USER)?;
        self.manager.set_all_received_workouts_seen(&active_user)?;
        Ok(Value::String(ALL_SEEN_MESSAGE.to_string()))
    }
}

/// Another user's data, looked up by `username`
pub struct GetUserDataController {
    manager: Arc<GetUserDataManager>,
}

impl GetUserDataController {
    pub fn new(manager: Arc<GetUserDataManager>) -> Self {
        Self { manager }
    }
}

impl ApiRequestController for GetUserDataController {
    fn name(&self) -> &'static str {
        "GetUserDataController"
    }

    fn required_keys(&self) -> &'static [&'static str] {
        &[RequestFields::ACTIVE_USER, RequestFields::USERNAME]
    }

    fn handle(&self, body: &RequestBody) -> AppResult<Value> {
        let username = string_field(body, RequestFields::USERNAME)?;
        self.manager.get_user_data(&username)?.as_value()
    }
}

pub struct GetActiveUserDataController {
    manager: Arc<GetUserDataManager>,
}

impl GetActiveUserDataController {
    pub fn new(manager: Arc<GetUserDataManager>) -> Self {
        Self { manager }
    }
}

impl ApiRequestController for GetActiveUserDataController {
    fn name(&self) -> &'static str {
        "GetActiveUserDataController"
    }

    fn required_keys(&self) -> &'static [&'static str] {
        &[RequestFields::ACTIVE_USER]
    }

    fn handle(&self, body: &RequestBody) -> AppResult<Value> {
        let active_user = string_field(body, RequestFields::ACTIVE_USER)?;
        self.manager.get_active_user_data(&active_user)?.as_value()
    }
}
