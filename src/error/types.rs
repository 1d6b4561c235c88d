// src/error/types.rs
use crate::domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    /// Shorthand for a user-input error carrying the validator's message
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Domain(DomainError::Validation(message.into()))
    }

    pub fn user_not_found(username: &str) -> Self {
        AppError::NotFound(format!("{} not found.", username))
    }

    pub fn workout_not_found(workout_id: &str) -> Self {
        AppError::NotFound(format!("Workout {} not found.", workout_id))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Domain(DomainError::Validation(_)))
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
