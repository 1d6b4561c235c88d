// src/lib.rs
// WorkoutLog - workout tracking API backend
//
// Architecture:
// - Domain-centric: entities, invariants and derived fields live in `domain`
// - Managers: one per use case, fetch -> validate -> mutate -> persist
// - Atomic: multi-record changes go through one write transaction
// - Explicit: repositories and telemetry are injected, no globals
// - Application Layer: controllers, request routing, result mapping

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod repositories;

// ============================================================================
// USE CASES
// ============================================================================

pub mod managers;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    // Exercises
    default_exercises,
    validate_new_exercise,
    // Workouts
    validate_new_workout_input,
    validate_routine,
    validate_workout,
    validate_workout_name,
    ExerciseRoutine,
    ExerciseUser,
    // Responses
    ExerciseUserResponse,
    Model,
    ReceivedWorkoutMeta,
    Routine,
    RoutineDay,
    RoutineWeek,
    // Users
    User,
    UserPreferences,
    UserResponse,
    UserWithWorkout,
    Workout,
    WorkoutUser,
    FOCUS_LIST,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use domain::{DomainError, DomainResult};
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Configuration & Database
// ============================================================================

pub use config::AppConfig;
pub use db::{create_connection_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    SqliteTransactionRepository, SqliteUserRepository, SqliteWorkoutRepository,
    TransactionRepository, UpdateItemData, UserRepository, WorkoutRepository, WriteOperation,
};

// ============================================================================
// PUBLIC API - Managers & Telemetry
// ============================================================================

pub use managers::{
    CopyWorkoutManager, GetUserDataManager, NewExerciseManager, NewUserManager,
    NewWorkoutManager, RenameWorkoutManager, RestartWorkoutManager,
    SetAllReceivedWorkoutsSeenManager,
};
pub use metrics::{scoped, LogMetrics, Metrics};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{ApiRequest, ApiRouter, AppState, ErrorType, ResultStatus};
