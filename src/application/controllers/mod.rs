// src/application/controllers/mod.rs
//
// Controllers
//
// RULES:
// - Check required keys first
// - Pull typed fields out of the request body
// - Call exactly one manager
// - Never contain business logic

pub mod exercise_controllers;
pub mod user_controllers;
pub mod workout_controllers;

pub use exercise_controllers::NewExerciseController;
pub use user_controllers::{
    GetActiveUserDataController, GetUserDataController, SetAllReceivedWorkoutsSeenController,
};
pub use workout_controllers::{
    CopyWorkoutController, NewWorkoutController, RenameWorkoutController,
    RestartWorkoutController,
};

use serde_json::Value;

use super::error_handling::ResultStatus;
use super::request::{require_keys, MissingApiRequestKeyError, RequestBody};
use crate::error::AppResult;

pub trait ApiRequestController: Send + Sync {
    /// Name used in failure messages and logs
    fn name(&self) -> &'static str;

    fn required_keys(&self) -> &'static [&'static str];

    /// Run the manager and build the success payload
    fn handle(&self, body: &RequestBody) -> AppResult<Value>;

    fn process_api_request(
        &self,
        body: &RequestBody,
    ) -> Result<ResultStatus, MissingApiRequestKeyError> {
        require_keys(body, self.required_keys())?;

        Ok(match self.handle(body) {
            Ok(payload) => ResultStatus::successful(payload),
            Err(e) => ResultStatus::from_app_error(self.name(), e),
        })
    }
}
