// src/application/request.rs
//
// Request bundle handling
//
// RULES:
// - Required keys are checked before any manager runs
// - A present key with the wrong shape is an internal failure, not a
//   missing key

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::error::{AppError, AppResult};

/// Field names clients send. These must match the front end.
pub struct RequestFields;

impl RequestFields {
    pub const ACTIVE_USER: &'static str = "activeUser";
    pub const USERNAME: &'static str = "username";
    pub const WORKOUT: &'static str = "workout";
    pub const WORKOUT_ID: &'static str = "workoutId";
    pub const WORKOUT_NAME: &'static str = "workoutName";
    pub const ROUTINE: &'static str = "routine";
    pub const EXERCISE_NAME: &'static str = "exerciseName";
    pub const FOCUSES: &'static str = "focuses";
}

/// Flat field-keyed input of one request
pub type RequestBody = Map<String, Value>;

/// One request line as read by the binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiRequest {
    pub action: String,
    #[serde(default)]
    pub body: RequestBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing required keys: {}", required_keys.join(", "))]
pub struct MissingApiRequestKeyError {
    pub required_keys: Vec<String>,
}

pub fn require_keys(body: &RequestBody, required: &[&str]) -> Result<(), MissingApiRequestKeyError> {
    if required.iter().all(|key| body.contains_key(*key)) {
        Ok(())
    } else {
        Err(MissingApiRequestKeyError {
            required_keys: required.iter().map(|key| key.to_string()).collect(),
        })
    }
}

/// Deserialize one field of the body into `T`
pub fn field<T: DeserializeOwned>(body: &RequestBody, key: &str) -> AppResult<T> {
    let value = body
        .get(key)
        .ok_or_else(|| AppError::Other(format!("Request field {} is absent", key)))?;
    Ok(serde_json::from_value(value.clone())?)
}

pub fn string_field(body: &RequestBody, key: &str) -> AppResult<String> {
    match body.get(key) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(other) => Err(AppError::Other(format!(
            "Request field {} must be a string, got {}",
            key, other
        ))),
        None => Err(AppError::Other(format!("Request field {} is absent", key))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> RequestBody {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_require_keys_lists_every_required_key() {
        let body = body(json!({"activeUser": "alice"}));
        assert!(require_keys(&body, &[RequestFields::ACTIVE_USER]).is_ok());

        let err = require_keys(&body, &[RequestFields::ACTIVE_USER, RequestFields::WORKOUT_ID])
            .unwrap_err();
        assert_eq!(err.required_keys, vec!["activeUser", "workoutId"]);
        assert_eq!(err.to_string(), "Missing required keys: activeUser, workoutId");
    }

    #[test]
    fn test_string_field_rejects_other_types() {
        let body = body(json!({"activeUser": 42}));
        assert!(matches!(
            string_field(&body, RequestFields::ACTIVE_USER),
            Err(AppError::Other(_))
        ));
    }

    #[test]
    fn test_typed_field() {
        let body = body(json!({"focuses": ["Chest", "Back"]}));
        let focuses: Vec<String> = field(&body, RequestFields::FOCUSES).unwrap();
        assert_eq!(focuses, vec!["Chest", "Back"]);
        assert!(field::<u32>(&body, RequestFields::FOCUSES).is_err());
    }

    #[test]
    fn test_request_without_body() {
        let request: ApiRequest = serde_json::from_str(r#"{"action": "getActiveUserData"}"#).unwrap();
        assert!(request.body.is_empty());
    }
}
