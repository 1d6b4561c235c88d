use crate::domain::user::User;
use crate::domain::{into_validation_result, DomainResult};

use super::entity::FOCUS_LIST;

pub const MAX_EXERCISE_NAME_LENGTH: usize = 40;
pub const MAX_CUSTOM_EXERCISES: usize = 100;

/// Validates a proposed custom exercise against the user's current state.
///
/// Every violated rule contributes one line to the error message.
pub fn validate_new_exercise(
    user: &User,
    exercise_name: &str,
    focuses: &[String],
) -> DomainResult<()> {
    let mut errors = Vec::new();

    if user.custom_exercise_count() >= MAX_CUSTOM_EXERCISES {
        errors.push(format!(
            "Cannot have more than {} custom exercises.",
            MAX_CUSTOM_EXERCISES
        ));
    }
    check_exercise_name(exercise_name, user, &mut errors);
    check_focuses(focuses, &mut errors);

    into_validation_result(errors)
}

fn check_exercise_name(exercise_name: &str, user: &User, errors: &mut Vec<String>) {
    let trimmed = exercise_name.trim();
    if trimmed.is_empty() {
        errors.push("Exercise name cannot be empty.".to_string());
        return;
    }
    if trimmed.chars().count() > MAX_EXERCISE_NAME_LENGTH {
        errors.push(format!(
            "Exercise name cannot exceed {} characters.",
            MAX_EXERCISE_NAME_LENGTH
        ));
    }
    let lowered = trimmed.to_lowercase();
    if user
        .exercises
        .values()
        .any(|e| e.exercise_name.trim().to_lowercase() == lowered)
    {
        errors.push("Exercise name already exists.".to_string());
    }
}

fn check_focuses(focuses: &[String], errors: &mut Vec<String>) {
    if focuses.is_empty() {
        errors.push("Must have at least one focus.".to_string());
        return;
    }
    for (i, focus) in focuses.iter().enumerate() {
        if !FOCUS_LIST.contains(&focus.as_str()) {
            errors.push(format!("Invalid focus: {}.", focus));
        } else if focuses[..i].contains(focus) {
            errors.push(format!("Duplicate focus: {}.", focus));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::exercise::ExerciseUser;
    use crate::domain::DomainError;

    fn focuses(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn user_with_exercise(name: &str) -> User {
        let mut user = User::new("alice".to_string());
        user.exercises.insert(
            "ex-1".to_string(),
            ExerciseUser::new(name.to_string(), String::new(), focuses(&["Chest"]), false),
        );
        user
    }

    #[test]
    fn test_valid_new_exercise() {
        let user = user_with_exercise("Bench Press");
        assert!(validate_new_exercise(&user, "Cable Fly", &focuses(&["Chest"])).is_ok());
    }

    #[test]
    fn test_blank_name_fails() {
        let user = User::new("alice".to_string());
        assert!(validate_new_exercise(&user, "   ", &focuses(&["Chest"])).is_err());
    }

    #[test]
    fn test_duplicate_name_is_case_insensitive() {
        let user = user_with_exercise("Bench Press");
        let result = validate_new_exercise(&user, " bench press ", &focuses(&["Chest"]));
        match result {
            Err(DomainError::Validation(message)) => {
                assert!(message.contains("already exists"))
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_focus_rules() {
        let user = User::new("alice".to_string());
        assert!(validate_new_exercise(&user, "Curl", &[]).is_err());
        assert!(validate_new_exercise(&user, "Curl", &focuses(&["Forearms"])).is_err());
        assert!(validate_new_exercise(&user, "Curl", &focuses(&["Biceps", "Biceps"])).is_err());
    }

    #[test]
    fn test_custom_exercise_limit() {
        let mut user = User::new("alice".to_string());
        for i in 0..MAX_CUSTOM_EXERCISES {
            user.exercises.insert(
                format!("ex-{}", i),
                ExerciseUser::new(format!("Exercise {}", i), String::new(), focuses(&["Core"]), false),
            );
        }
        assert!(validate_new_exercise(&user, "One More", &focuses(&["Core"])).is_err());
    }

    #[test]
    fn test_default_exercises_do_not_count_towards_limit() {
        let mut user = User::new("alice".to_string());
        for i in 0..MAX_CUSTOM_EXERCISES {
            user.exercises.insert(
                format!("ex-{}", i),
                ExerciseUser::new(format!("Exercise {}", i), String::new(), focuses(&["Core"]), true),
            );
        }
        assert!(validate_new_exercise(&user, "One More", &focuses(&["Core"])).is_ok());
    }

    #[test]
    fn test_multiple_errors_are_reported_together() {
        let user = User::new("alice".to_string());
        match validate_new_exercise(&user, "", &[]) {
            Err(DomainError::Validation(message)) => assert_eq!(message.lines().count(), 2),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
