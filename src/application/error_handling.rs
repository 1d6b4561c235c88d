// src/application/error_handling.rs
//
// Controller results
//
// ARCHITECTURE:
// - Maps manager errors to response categories
// - User-input and not-found errors carry their message to the client
// - Anything else gets a generic message; the full error goes to the log

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::request::MissingApiRequestKeyError;
use crate::domain::DomainError;
use crate::error::AppError;

pub const SUCCESS_CODE: u16 = 200;
pub const BAD_REQUEST_CODE: u16 = 400;
pub const BAD_ENTITY_CODE: u16 = 422;
pub const INTERNAL_ERROR_CODE: u16 = 500;

/// Failure categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Request lacks a required key (400)
    MissingRequiredField,

    /// Business rule violated (422)
    Validation,

    /// Referenced user or workout does not exist (422)
    NotFound,

    /// Anything else (500)
    Internal,
}

/// Outcome of one API request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultStatus {
    pub success: bool,
    pub response_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<ErrorType>,
    /// Success payload, or the failure message as a string
    pub result_message: Value,
}

impl ResultStatus {
    pub fn successful(payload: Value) -> Self {
        Self {
            success: true,
            response_code: SUCCESS_CODE,
            error_type: None,
            result_message: payload,
        }
    }

    pub fn failure(response_code: u16, error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            success: false,
            response_code,
            error_type: Some(error_type),
            result_message: Value::String(message.into()),
        }
    }

    pub fn missing_keys(error: &MissingApiRequestKeyError) -> Self {
        Self::failure(
            BAD_REQUEST_CODE,
            ErrorType::MissingRequiredField,
            error.to_string(),
        )
    }

    /// Map a manager error raised inside `controller`
    pub fn from_app_error(controller: &str, error: AppError) -> Self {
        match error {
            AppError::Domain(DomainError::Validation(message)) => {
                log::warn!("Input error in {}: {}", controller, message);
                Self::failure(BAD_ENTITY_CODE, ErrorType::Validation, message)
            }

            AppError::NotFound(message) => {
                log::warn!("{}: {}", controller, message);
                Self::failure(BAD_ENTITY_CODE, ErrorType::NotFound, message)
            }

            other => {
                log::error!("{}.processApiRequest failed: {:?}", controller, other);
                Self::failure(
                    INTERNAL_ERROR_CODE,
                    ErrorType::Internal,
                    format!("Exception in {}.processApiRequest", controller),
                )
            }
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.result_message.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validation_error_keeps_message() {
        let status =
            ResultStatus::from_app_error("NewWorkoutController", AppError::validation("Too long."));
        assert_eq!(status.error_type, Some(ErrorType::Validation));
        assert_eq!(status.response_code, BAD_ENTITY_CODE);
        assert_eq!(status.message(), Some("Too long."));
    }

    #[test]
    fn test_not_found_is_bad_entity() {
        let status =
            ResultStatus::from_app_error("GetUserDataController", AppError::user_not_found("bob"));
        assert_eq!(status.error_type, Some(ErrorType::NotFound));
        assert_eq!(status.response_code, BAD_ENTITY_CODE);
        assert_eq!(status.message(), Some("bob not found."));
    }

    #[test]
    fn test_internal_error_is_generic() {
        let status = ResultStatus::from_app_error(
            "RenameWorkoutController",
            AppError::Pool("timed out".to_string()),
        );
        assert_eq!(status.error_type, Some(ErrorType::Internal));
        assert_eq!(status.response_code, INTERNAL_ERROR_CODE);
        assert_eq!(
            status.message(),
            Some("Exception in RenameWorkoutController.processApiRequest")
        );
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_value(ResultStatus::successful(json!({"user": {}}))).unwrap();
        assert_eq!(json["responseCode"], 200);
        assert!(json.get("errorType").is_none());

        let missing = MissingApiRequestKeyError {
            required_keys: vec!["activeUser".to_string()],
        };
        let json = serde_json::to_string(&ResultStatus::missing_keys(&missing)).unwrap();
        assert!(json.contains("missing_required_field"));
        assert!(json.contains("activeUser"));
    }
}
