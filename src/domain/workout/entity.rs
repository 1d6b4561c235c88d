use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::routine::Routine;
use crate::domain::model::Model;

/// Stored field names used in update specs
pub const WORKOUT_NAME: &str = "workoutName";
pub const CURRENT_DAY: &str = "currentDay";
pub const CURRENT_WEEK: &str = "currentWeek";
pub const ROUTINE: &str = "routine";

/// Root workout record, keyed by `workout_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub workout_id: String,

    pub workout_name: String,

    /// Username of the user that created this workout
    pub creator: String,

    pub creation_date: DateTime<Utc>,

    /// Focus tag appearing most often across the routine
    #[serde(default)]
    pub most_frequent_focus: Option<String>,

    #[serde(default)]
    pub current_day: u32,

    #[serde(default)]
    pub current_week: u32,

    pub routine: Routine,
}

impl Workout {
    /// Create a workout positioned at week 0, day 0
    pub fn new(
        workout_id: String,
        workout_name: String,
        creator: String,
        creation_date: DateTime<Utc>,
        routine: Routine,
    ) -> Self {
        Self {
            workout_id,
            workout_name,
            creator,
            creation_date,
            most_frequent_focus: None,
            current_day: 0,
            current_week: 0,
            routine,
        }
    }

    pub fn reset_position(&mut self) {
        self.current_day = 0;
        self.current_week = 0;
    }
}

impl Model for Workout {}
