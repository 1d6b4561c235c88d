use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::model::Model;

/// Video link stored on exercises created without one
pub const DEFAULT_VIDEO_VALUE: &str = "";

/// Recognized focus tags
pub const FOCUS_LIST: [&str; 8] = [
    "Back", "Biceps", "Cardio", "Chest", "Core", "Legs", "Shoulders", "Triceps",
];

/// A user's exercise definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseUser {
    pub exercise_name: String,

    #[serde(default)]
    pub default_weight: f64,

    pub focuses: Vec<String>,

    #[serde(default)]
    pub video_url: String,

    /// True for catalog exercises every user starts with
    #[serde(default)]
    pub default_exercise: bool,

    /// Workout id -> workout display name
    #[serde(default)]
    pub workouts: IndexMap<String, String>,
}

impl ExerciseUser {
    pub fn new(
        exercise_name: String,
        video_url: String,
        focuses: Vec<String>,
        default_exercise: bool,
    ) -> Self {
        Self {
            exercise_name,
            default_weight: 0.0,
            focuses,
            video_url,
            default_exercise,
            workouts: IndexMap::new(),
        }
    }

    pub fn is_custom(&self) -> bool {
        !self.default_exercise
    }
}

impl Model for ExerciseUser {}
