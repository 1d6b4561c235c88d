// src/domain/workout/routine.rs
//
// A routine is weeks of days of exercise entries. Indices are positions in
// the vectors, so they are 0-based and contiguous by construction.

use serde::{Deserialize, Serialize};

/// A scheduled exercise instance within a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRoutine {
    pub exercise_id: String,

    /// Target weight for this entry
    #[serde(default)]
    pub weight: f64,

    #[serde(default)]
    pub sets: u32,

    #[serde(default)]
    pub reps: u32,

    #[serde(default)]
    pub details: String,

    #[serde(default)]
    pub completed: bool,
}

impl ExerciseRoutine {
    pub fn new(exercise_id: String, weight: f64) -> Self {
        Self {
            exercise_id,
            weight,
            sets: 0,
            reps: 0,
            details: String::new(),
            completed: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutineDay {
    pub exercises: Vec<ExerciseRoutine>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutineWeek {
    pub days: Vec<RoutineDay>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Routine {
    pub weeks: Vec<RoutineWeek>,
}

impl RoutineDay {
    pub fn new(exercises: Vec<ExerciseRoutine>) -> Self {
        Self { exercises }
    }
}

impl RoutineWeek {
    pub fn new(days: Vec<RoutineDay>) -> Self {
        Self { days }
    }
}

impl Routine {
    pub fn new(weeks: Vec<RoutineWeek>) -> Self {
        Self { weeks }
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// Number of days in `week`, or `None` if the week does not exist
    pub fn day_count(&self, week: usize) -> Option<usize> {
        self.weeks.get(week).map(|w| w.days.len())
    }

    pub fn contains_day(&self, week: usize, day: usize) -> bool {
        self.day_count(week).is_some_and(|days| day < days)
    }

    /// Every entry in traversal order: weeks, then days, then entries
    pub fn entries(&self) -> impl Iterator<Item = &ExerciseRoutine> {
        self.weeks
            .iter()
            .flat_map(|w| w.days.iter())
            .flat_map(|d| d.exercises.iter())
    }

    pub fn entries_mut(&mut self) -> impl Iterator<Item = &mut ExerciseRoutine> {
        self.weeks
            .iter_mut()
            .flat_map(|w| w.days.iter_mut())
            .flat_map(|d| d.exercises.iter_mut())
    }

    pub fn entry_count(&self) -> usize {
        self.entries().count()
    }

    pub fn reset_completed(&mut self) {
        for entry in self.entries_mut() {
            entry.completed = false;
        }
    }
}
