// src/domain/responses.rs
//
// Manager results handed back to the controllers

use serde::Serialize;

use crate::domain::exercise::ExerciseUser;
use crate::domain::model::Model;
use crate::domain::user::User;
use crate::domain::workout::Workout;

/// User together with the workout an operation touched
#[derive(Debug, Clone, Serialize)]
pub struct UserWithWorkout {
    pub user: User,
    pub workout: Workout,
}

impl UserWithWorkout {
    pub fn new(user: User, workout: Workout) -> Self {
        Self { user, workout }
    }
}

impl Model for UserWithWorkout {}

/// A user's data as returned to clients
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct UserResponse {
    pub user: User,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self { user }
    }
}

impl Model for UserResponse {}

/// A newly created exercise and its id
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseUserResponse {
    pub exercise_id: String,
    pub exercise: ExerciseUser,
}

impl Model for ExerciseUserResponse {}
