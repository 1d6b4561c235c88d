// src/application/router.rs
//
// Action name -> controller dispatch

use std::collections::HashMap;

use super::controllers::*;
use super::error_handling::{ErrorType, ResultStatus, BAD_REQUEST_CODE};
use super::request::{ApiRequest, RequestBody};
use super::state::AppState;

pub mod actions {
    pub const NEW_WORKOUT: &str = "newWorkout";
    pub const RENAME_WORKOUT: &str = "renameWorkout";
    pub const RESTART_WORKOUT: &str = "restartWorkout";
    pub const COPY_WORKOUT: &str = "copyWorkout";
    pub const SET_ALL_RECEIVED_WORKOUTS_SEEN: &str = "setAllReceivedWorkoutsSeen";
    pub const GET_USER_DATA: &str = "getUserData";
    pub const GET_ACTIVE_USER_DATA: &str = "getActiveUserData";
    pub const NEW_EXERCISE: &str = "newExercise";
}

pub struct ApiRouter {
    controllers: HashMap<&'static str, Box<dyn ApiRequestController>>,
}

impl ApiRouter {
    pub fn new(state: &AppState) -> Self {
        let mut controllers: HashMap<&'static str, Box<dyn ApiRequestController>> =
            HashMap::new();

        controllers.insert(
            actions::NEW_WORKOUT,
            Box::new(NewWorkoutController::new(state.new_workout_manager.clone())),
        );
        controllers.insert(
            actions::RENAME_WORKOUT,
            Box::new(RenameWorkoutController::new(state.rename_workout_manager.clone())),
        );
        controllers.insert(
            actions::RESTART_WORKOUT,
            Box::new(RestartWorkoutController::new(state.restart_workout_manager.clone())),
        );
        controllers.insert(
            actions::COPY_WORKOUT,
            Box::new(CopyWorkoutController::new(state.copy_workout_manager.clone())),
        );
        controllers.insert(
            actions::SET_ALL_RECEIVED_WORKOUTS_SEEN,
            Box::new(SetAllReceivedWorkoutsSeenController::new(
                state.set_all_received_workouts_seen_manager.clone(),
            )),
        );
        controllers.insert(
            actions::GET_USER_DATA,
            Box::new(GetUserDataController::new(state.get_user_data_manager.clone())),
        );
        controllers.insert(
            actions::GET_ACTIVE_USER_DATA,
            Box::new(GetActiveUserDataController::new(state.get_user_data_manager.clone())),
        );
        controllers.insert(
            actions::NEW_EXERCISE,
            Box::new(NewExerciseController::new(state.new_exercise_manager.clone())),
        );

        Self { controllers }
    }

    pub fn dispatch(&self, action: &str, body: &RequestBody) -> ResultStatus {
        let Some(controller) = self.controllers.get(action) else {
            log::warn!("Unknown action {}", action);
            return ResultStatus::failure(
                BAD_REQUEST_CODE,
                ErrorType::Internal,
                format!("Unknown action: {}", action),
            );
        };

        match controller.process_api_request(body) {
            Ok(status) => status,
            Err(missing) => {
                log::warn!("{}: {}", controller.name(), missing);
                ResultStatus::missing_keys(&missing)
            }
        }
    }

    pub fn handle(&self, request: &ApiRequest) -> ResultStatus {
        self.dispatch(&request.action, &request.body)
    }

    /// Parse and dispatch one request line
    pub fn handle_line(&self, line: &str) -> ResultStatus {
        match serde_json::from_str::<ApiRequest>(line) {
            Ok(request) => self.handle(&request),
            Err(e) => {
                log::warn!("Malformed request: {}", e);
                ResultStatus::failure(
                    BAD_REQUEST_CODE,
                    ErrorType::Internal,
                    format!("Malformed request: {}", e),
                )
            }
        }
    }

    pub fn actions(&self) -> Vec<&'static str> {
        let mut actions: Vec<_> = self.controllers.keys().copied().collect();
        actions.sort_unstable();
        actions
    }
}
