// src/domain/workout_helper.rs
//
// Derived-field logic shared by the workout managers.

use indexmap::IndexMap;

use crate::domain::exercise::ExerciseUser;
use crate::domain::user::User;
use crate::domain::workout::Routine;
use crate::domain::workout_user::WorkoutUser;

/// Focus tag that appears most often across the routine's entries.
///
/// Entries are resolved against the user's exercises; unknown exercise ids
/// are skipped. Ties go to the focus encountered first in traversal order.
pub fn find_most_frequent_focus(user: &User, routine: &Routine) -> Option<String> {
    let mut tally: IndexMap<&str, u32> = IndexMap::new();
    for entry in routine.entries() {
        if let Some(exercise) = user.exercises.get(&entry.exercise_id) {
            for focus in &exercise.focuses {
                *tally.entry(focus.as_str()).or_insert(0) += 1;
            }
        }
    }

    let mut best: Option<(&str, u32)> = None;
    for (focus, count) in tally {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((focus, count));
        }
    }
    best.map(|(focus, _)| focus.to_string())
}

/// Record `workout_id -> workout_name` on every exercise the routine uses
pub fn update_user_exercises(
    user: &mut User,
    routine: &Routine,
    workout_id: &str,
    workout_name: &str,
) {
    for entry in routine.entries() {
        if let Some(exercise) = user.exercises.get_mut(&entry.exercise_id) {
            exercise
                .workouts
                .insert(workout_id.to_string(), workout_name.to_string());
        }
    }
}

/// Replace the display name of `workout_id` wherever an exercise lists it.
/// Returns the number of exercises touched.
pub fn rename_workout_in_exercises(user: &mut User, workout_id: &str, new_name: &str) -> usize {
    let mut touched = 0;
    for exercise in user.exercises.values_mut() {
        if let Some(name) = exercise.workouts.get_mut(workout_id) {
            *name = new_name.to_string();
            touched += 1;
        }
    }
    touched
}

/// Fold every routine entry into the rollup's running average and clear the
/// completed flags.
///
/// Completed entries count as 1, the rest as 0. When `update_default_weight`
/// is set, a completed entry heavier than the exercise's default weight
/// raises that default.
pub fn restart_routine(
    routine: &mut Routine,
    workout_user: &mut WorkoutUser,
    exercises: &mut IndexMap<String, ExerciseUser>,
    update_default_weight: bool,
) {
    for entry in routine.entries_mut() {
        workout_user.record_exercise_sample(entry.completed);
        if !entry.completed {
            continue;
        }
        entry.completed = false;

        if update_default_weight {
            if let Some(exercise) = exercises.get_mut(&entry.exercise_id) {
                if entry.weight > exercise.default_weight {
                    exercise.default_weight = entry.weight;
                }
            }
        }
    }
}
