use super::entity::Workout;
use super::routine::Routine;
use crate::domain::user::User;
use crate::domain::{into_validation_result, DomainError, DomainResult};

pub const MAX_WORKOUT_NAME_LENGTH: usize = 50;
pub const MAX_WORKOUTS: usize = 10;
pub const MAX_WEEKS: usize = 12;
pub const MAX_DAYS_PER_WEEK: usize = 8;
pub const MAX_EXERCISES_PER_DAY: usize = 15;

/// Validates input for a brand new workout (created or copied).
pub fn validate_new_workout_input(
    workout_name: &str,
    user: &User,
    routine: &Routine,
) -> DomainResult<()> {
    let mut errors = Vec::new();

    if user.workouts.len() >= MAX_WORKOUTS {
        errors.push(format!("Cannot have more than {} workouts.", MAX_WORKOUTS));
    }
    check_workout_name(workout_name, user, None, &mut errors);
    check_routine(routine, user, &mut errors);

    into_validation_result(errors)
}

/// Validates a workout name. `renaming` excludes that workout id from the
/// uniqueness check.
pub fn validate_workout_name(
    workout_name: &str,
    user: &User,
    renaming: Option<&str>,
) -> DomainResult<()> {
    let mut errors = Vec::new();
    check_workout_name(workout_name, user, renaming, &mut errors);
    into_validation_result(errors)
}

pub fn validate_routine(routine: &Routine, user: &User) -> DomainResult<()> {
    let mut errors = Vec::new();
    check_routine(routine, user, &mut errors);
    into_validation_result(errors)
}

/// Structural invariant: the day/week pointers sit inside the routine
pub fn validate_workout(workout: &Workout) -> DomainResult<()> {
    let week = workout.current_week as usize;
    let day = workout.current_day as usize;
    if !workout.routine.contains_day(week, day) {
        return Err(DomainError::InvariantViolation(format!(
            "Workout {} points at week {} day {} outside of its routine",
            workout.workout_id, week, day
        )));
    }
    Ok(())
}

fn check_workout_name(
    workout_name: &str,
    user: &User,
    renaming: Option<&str>,
    errors: &mut Vec<String>,
) {
    let trimmed = workout_name.trim();
    if trimmed.is_empty() {
        errors.push("Workout name cannot be empty.".to_string());
        return;
    }
    if trimmed.chars().count() > MAX_WORKOUT_NAME_LENGTH {
        errors.push(format!(
            "Workout name cannot exceed {} characters.",
            MAX_WORKOUT_NAME_LENGTH
        ));
    }
    let lowered = trimmed.to_lowercase();
    let duplicate = user
        .workouts
        .iter()
        .filter(|(id, _)| Some(id.as_str()) != renaming)
        .any(|(_, w)| w.workout_name.trim().to_lowercase() == lowered);
    if duplicate {
        errors.push("Workout name already exists.".to_string());
    }
}

fn check_routine(routine: &Routine, user: &User, errors: &mut Vec<String>) {
    if routine.weeks.is_empty() {
        errors.push("Workout must have at least one week.".to_string());
        return;
    }
    if routine.week_count() > MAX_WEEKS {
        errors.push(format!("Workout cannot exceed {} weeks.", MAX_WEEKS));
    }

    for (week_index, week) in routine.weeks.iter().enumerate() {
        if week.days.is_empty() {
            errors.push(format!("Week {} must have at least one day.", week_index + 1));
        }
        if week.days.len() > MAX_DAYS_PER_WEEK {
            errors.push(format!(
                "Week {} cannot exceed {} days.",
                week_index + 1,
                MAX_DAYS_PER_WEEK
            ));
        }
        for (day_index, day) in week.days.iter().enumerate() {
            if day.exercises.is_empty() {
                errors.push(format!(
                    "Week {} day {} must have at least one exercise.",
                    week_index + 1,
                    day_index + 1
                ));
            }
            if day.exercises.len() > MAX_EXERCISES_PER_DAY {
                errors.push(format!(
                    "Week {} day {} cannot exceed {} exercises.",
                    week_index + 1,
                    day_index + 1,
                    MAX_EXERCISES_PER_DAY
                ));
            }
            for entry in &day.exercises {
                if !user.exercises.contains_key(&entry.exercise_id) {
                    errors.push(format!("Exercise {} does not exist.", entry.exercise_id));
                }
                if !entry.weight.is_finite() || entry.weight < 0.0 {
                    errors.push(format!(
                        "Invalid weight for exercise {}.",
                        entry.exercise_id
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::exercise::ExerciseUser;
    use crate::domain::workout::{ExerciseRoutine, RoutineDay, RoutineWeek};
    use crate::domain::workout_user::WorkoutUser;
    use chrono::Utc;

    fn user() -> User {
        let mut user = User::new("alice".to_string());
        user.exercises.insert(
            "squat".to_string(),
            ExerciseUser::new("Squat".to_string(), String::new(), vec!["Legs".to_string()], true),
        );
        user
    }

    fn routine(exercise_id: &str) -> Routine {
        Routine::new(vec![RoutineWeek::new(vec![RoutineDay::new(vec![
            ExerciseRoutine::new(exercise_id.to_string(), 100.0),
        ])])])
    }

    fn add_workout(user: &mut User, id: &str, name: &str) {
        user.workouts
            .insert(id.to_string(), WorkoutUser::new(name.to_string(), Utc::now()));
    }

    #[test]
    fn test_valid_new_workout() {
        assert!(validate_new_workout_input(" Leg Day ", &user(), &routine("squat")).is_ok());
    }

    #[test]
    fn test_duplicate_name_rejected_case_insensitively() {
        let mut user = user();
        add_workout(&mut user, "w1", "Leg Day");
        assert!(validate_new_workout_input("leg day", &user, &routine("squat")).is_err());
        assert!(validate_new_workout_input("  Leg Day  ", &user, &routine("squat")).is_err());
        assert!(validate_new_workout_input("Leg Day 2", &user, &routine("squat")).is_ok());
    }

    #[test]
    fn test_blank_and_long_names_rejected() {
        let user = user();
        assert!(validate_workout_name("   ", &user, None).is_err());
        let long = "x".repeat(MAX_WORKOUT_NAME_LENGTH + 1);
        assert!(validate_workout_name(&long, &user, None).is_err());
    }

    #[test]
    fn test_rename_ignores_the_workout_being_renamed() {
        let mut user = user();
        add_workout(&mut user, "w1", "Leg Day");
        add_workout(&mut user, "w2", "Push Day");
        assert!(validate_workout_name("LEG DAY", &user, Some("w1")).is_ok());
        assert!(validate_workout_name("Push Day", &user, Some("w1")).is_err());
    }

    #[test]
    fn test_workout_limit() {
        let mut user = user();
        for i in 0..MAX_WORKOUTS {
            add_workout(&mut user, &format!("w{}", i), &format!("Workout {}", i));
        }
        assert!(validate_new_workout_input("Another", &user, &routine("squat")).is_err());
    }

    #[test]
    fn test_routine_shape_rules() {
        let user = user();
        assert!(validate_routine(&Routine::default(), &user).is_err());
        assert!(validate_routine(&Routine::new(vec![RoutineWeek::default()]), &user).is_err());
        let empty_day = Routine::new(vec![RoutineWeek::new(vec![RoutineDay::default()])]);
        assert!(validate_routine(&empty_day, &user).is_err());
        assert!(validate_routine(&routine("unknown"), &user).is_err());
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut routine = routine("squat");
        routine.weeks[0].days[0].exercises[0].weight = -5.0;
        assert!(validate_routine(&routine, &user()).is_err());
    }

    #[test]
    fn test_workout_position_invariant() {
        let mut workout = Workout::new(
            "w1".to_string(),
            "Leg Day".to_string(),
            "alice".to_string(),
            Utc::now(),
            routine("squat"),
        );
        assert!(validate_workout(&workout).is_ok());
        workout.current_week = 3;
        assert!(validate_workout(&workout).is_err());
    }
}
