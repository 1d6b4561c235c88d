// src/repositories/update_item.rs
//
// Update specs and write operations
//
// An update names a record by key and lists field-path -> value
// assignments. Fields it does not mention are left untouched.

use serde_json::Value;
use std::fmt;

use crate::domain::{DomainError, DomainResult, Model, User, Workout};
use crate::error::AppResult;

/// Stores backing the two root entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Users,
    Workouts,
}

impl Table {
    pub fn name(&self) -> &'static str {
        match self {
            Table::Users => "users",
            Table::Workouts => "workouts",
        }
    }

    pub fn key_column(&self) -> &'static str {
        match self {
            Table::Users => "username",
            Table::Workouts => "workout_id",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One `path = value` assignment. Every segment but the last must name an
/// existing map.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldAssignment {
    pub path: Vec<String>,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateItemData {
    pub key: String,
    pub assignments: Vec<FieldAssignment>,
}

impl UpdateItemData {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            assignments: Vec::new(),
        }
    }

    /// `set field = value`
    pub fn set(mut self, field: &str, value: Value) -> Self {
        self.assignments.push(FieldAssignment {
            path: vec![field.to_string()],
            value,
        });
        self
    }

    /// `set field.entry = value`, for one entry of a map-valued field
    pub fn set_entry(mut self, field: &str, entry: &str, value: Value) -> Self {
        self.assignments.push(FieldAssignment {
            path: vec![field.to_string(), entry.to_string()],
            value,
        });
        self
    }

    /// Apply every assignment to a stored document, in order
    pub fn apply_to(&self, item: &mut Value) -> DomainResult<()> {
        for assignment in &self.assignments {
            apply_assignment(item, assignment)?;
        }
        Ok(())
    }
}

fn apply_assignment(item: &mut Value, assignment: &FieldAssignment) -> DomainResult<()> {
    let (last, parents) = assignment
        .path
        .split_last()
        .ok_or_else(|| DomainError::InvalidUpdate("empty field path".to_string()))?;

    let mut current = item;
    for segment in parents {
        current = current
            .get_mut(segment.as_str())
            .filter(|v| v.is_object())
            .ok_or_else(|| {
                DomainError::InvalidUpdate(format!(
                    "path {} does not resolve to a map at '{}'",
                    assignment.path.join("."),
                    segment
                ))
            })?;
    }

    let target = current.as_object_mut().ok_or_else(|| {
        DomainError::InvalidUpdate(format!(
            "cannot set {} on a non-map value",
            assignment.path.join(".")
        ))
    })?;
    target.insert(last.clone(), assignment.value.clone());
    Ok(())
}

/// One write inside an atomic transaction
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOperation {
    /// Insert or replace a whole record
    Put {
        table: Table,
        key: String,
        item: Value,
    },
    /// Field-level update of an existing record
    Update { table: Table, update: UpdateItemData },
}

impl WriteOperation {
    pub fn put_user(user: &User) -> AppResult<Self> {
        Ok(WriteOperation::Put {
            table: Table::Users,
            key: user.username.clone(),
            item: user.as_value()?,
        })
    }

    pub fn put_workout(workout: &Workout) -> AppResult<Self> {
        Ok(WriteOperation::Put {
            table: Table::Workouts,
            key: workout.workout_id.clone(),
            item: workout.as_value()?,
        })
    }

    pub fn update_user(update: UpdateItemData) -> Self {
        WriteOperation::Update {
            table: Table::Users,
            update,
        }
    }

    pub fn update_workout(update: UpdateItemData) -> Self {
        WriteOperation::Update {
            table: Table::Workouts,
            update,
        }
    }

    pub fn table(&self) -> Table {
        match self {
            WriteOperation::Put { table, .. } | WriteOperation::Update { table, .. } => *table,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            WriteOperation::Put { key, .. } => key,
            WriteOperation::Update { update, .. } => &update.key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_top_level_and_nested_fields() {
        let mut item = json!({"name": "old", "workouts": {"w1": {"n": 1}}, "untouched": true});
        UpdateItemData::new("alice")
            .set("name", json!("new"))
            .set_entry("workouts", "w2", json!({"n": 2}))
            .apply_to(&mut item)
            .unwrap();

        assert_eq!(item["name"], "new");
        assert_eq!(item["workouts"]["w1"]["n"], 1);
        assert_eq!(item["workouts"]["w2"]["n"], 2);
        assert_eq!(item["untouched"], true);
    }

    #[test]
    fn test_missing_parent_map_is_rejected() {
        let mut item = json!({"name": "old"});
        let result = UpdateItemData::new("alice")
            .set_entry("workouts", "w1", json!({}))
            .apply_to(&mut item);
        assert!(matches!(result, Err(DomainError::InvalidUpdate(_))));
    }

    #[test]
    fn test_non_map_parent_is_rejected() {
        let mut item = json!({"workouts": 3});
        let result = UpdateItemData::new("alice")
            .set_entry("workouts", "w1", json!({}))
            .apply_to(&mut item);
        assert!(result.is_err());
    }

    #[test]
    fn test_write_operation_keys() {
        let user = User::new("alice".to_string());
        let put = WriteOperation::put_user(&user).unwrap();
        assert_eq!(put.table(), Table::Users);
        assert_eq!(put.key(), "alice");

        let update = WriteOperation::update_workout(UpdateItemData::new("w1"));
        assert_eq!(update.table(), Table::Workouts);
        assert_eq!(update.key(), "w1");
    }
}
