// src/domain/model.rs
//
// Shared "serializable to a map" contract for persisted entities and
// manager responses.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

/// An entity or response that can be flattened into a field map.
///
/// The map is both the stored document shape and the wire payload.
pub trait Model: Serialize {
    fn as_map(&self) -> AppResult<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(AppError::Other(format!(
                "Expected a map when serializing model, got {}",
                other
            ))),
        }
    }

    fn as_value(&self) -> AppResult<Value> {
        Ok(Value::Object(self.as_map()?))
    }
}
