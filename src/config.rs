// src/config.rs
//
// Application configuration
//
// Resolution order:
// 1. Built-in defaults
// 2. TOML file ($WORKOUTLOG_CONFIG, else {CONFIG_DIR}/workoutlog/config.toml)
// 3. Environment overrides (WORKOUTLOG_DB_PATH, WORKOUTLOG_LOG_LEVEL)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

pub const CONFIG_PATH_ENV: &str = "WORKOUTLOG_CONFIG";
pub const DB_PATH_ENV: &str = "WORKOUTLOG_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "WORKOUTLOG_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// SQLite file; `None` means the platform data directory
    pub database_path: Option<PathBuf>,

    pub pool_max_size: u32,

    pub busy_timeout_ms: u32,

    /// Default filter for the logger, overridden by RUST_LOG
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            pool_max_size: 15,
            busy_timeout_ms: 5000,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location plus env overrides.
    /// A missing file yields the defaults.
    pub fn load() -> AppResult<Self> {
        let path = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Some(PathBuf::from(path)),
            None => default_config_path(),
        };

        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        let config: AppConfig = toml::from_str(content)?;
        if config.pool_max_size == 0 {
            return Err(AppError::Config("pool_max_size must be at least 1".to_string()));
        }
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Some(path) = std::env::var_os(DB_PATH_ENV) {
            self.database_path = Some(PathBuf::from(path));
        }
        if let Ok(level) = std::env::var(LOG_LEVEL_ENV) {
            self.log_level = level;
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("workoutlog").join("config.toml"))
}
