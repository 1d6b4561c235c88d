// src/domain/workout_user.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::model::Model;

/// Per-user rollup of progress on one workout.
///
/// `workout_name` is a denormalized copy of `Workout::workout_name` and is
/// kept in sync by the managers that rename workouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutUser {
    pub workout_name: String,

    /// Running mean of completion samples (1 = completed, 0 = skipped)
    pub average_exercises_completed: f64,

    /// Number of samples folded into the average. Never decreases.
    pub total_exercises_sum: u32,

    pub times_completed: u32,

    /// Last activity on this workout
    pub date_last: DateTime<Utc>,
}

impl WorkoutUser {
    /// Fresh rollup with zeroed counters
    pub fn new(workout_name: String, date_last: DateTime<Utc>) -> Self {
        Self {
            workout_name,
            average_exercises_completed: 0.0,
            total_exercises_sum: 0,
            times_completed: 0,
            date_last,
        }
    }

    /// Fold one exercise entry into the running average.
    pub fn record_exercise_sample(&mut self, completed: bool) {
        let sample = if completed { 1.0 } else { 0.0 };
        self.average_exercises_completed = increase_average(
            self.average_exercises_completed,
            self.total_exercises_sum,
            sample,
        );
        self.total_exercises_sum += 1;
    }
}

/// `(new_value + old_average * count) / (count + 1)`
pub fn increase_average(old_average: f64, count: u32, new_value: f64) -> f64 {
    let count = f64::from(count);
    (new_value + old_average * count) / (count + 1.0)
}

impl Model for WorkoutUser {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_workout_user_is_zeroed() {
        let workout_user = WorkoutUser::new("Push".to_string(), Utc::now());
        assert_eq!(workout_user.times_completed, 0);
        assert_eq!(workout_user.total_exercises_sum, 0);
        assert_eq!(workout_user.average_exercises_completed, 0.0);
    }

    #[test]
    fn test_running_average_matches_mean() {
        let mut workout_user = WorkoutUser::new("Push".to_string(), Utc::now());
        for completed in [true, false, true, true, false] {
            workout_user.record_exercise_sample(completed);
        }
        assert_eq!(workout_user.total_exercises_sum, 5);
        assert!((workout_user.average_exercises_completed - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_running_average_continues_from_previous_mean() {
        let mut workout_user = WorkoutUser::new("Push".to_string(), Utc::now());
        workout_user.average_exercises_completed = 0.5;
        workout_user.total_exercises_sum = 2;

        workout_user.record_exercise_sample(true);

        assert_eq!(workout_user.total_exercises_sum, 3);
        assert!((workout_user.average_exercises_completed - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_serializes_camel_case_fields() {
        let workout_user = WorkoutUser::new("Push".to_string(), Utc::now());
        let map = workout_user.as_map().unwrap();
        assert!(map.contains_key("workoutName"));
        assert!(map.contains_key("averageExercisesCompleted"));
        assert!(map.contains_key("totalExercisesSum"));
        assert!(map.contains_key("timesCompleted"));
        assert!(map.contains_key("dateLast"));
    }
}
