// src/managers/get_user_data_manager.rs
use std::sync::Arc;

use super::new_user_manager::NewUserManager;
use super::require_user;
use crate::domain::UserResponse;
use crate::error::AppResult;
use crate::metrics::{scoped, Metrics};
use crate::repositories::UserRepository;

pub struct GetUserDataManager {
    user_repo: Arc<dyn UserRepository>,
    new_user_manager: Arc<NewUserManager>,
    metrics: Arc<dyn Metrics>,
}

impl GetUserDataManager {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        new_user_manager: Arc<NewUserManager>,
        metrics: Arc<dyn Metrics>,
    ) -> Self {
        Self {
            user_repo,
            new_user_manager,
            metrics,
        }
    }

    /// Data of any existing user
    pub fn get_user_data(&self, username: &str) -> AppResult<UserResponse> {
        scoped(self.metrics.as_ref(), "GetUserDataManager.get_user_data", || {
            require_user(self.user_repo.as_ref(), username).map(UserResponse::from)
        })
    }

    /// Data of the caller. The first call for a username creates its record.
    pub fn get_active_user_data(&self, active_user: &str) -> AppResult<UserResponse> {
        scoped(self.metrics.as_ref(), "GetUserDataManager.get_active_user_data", || {
            let user = match self.user_repo.get_user(active_user)? {
                Some(user) => user,
                None => self.new_user_manager.create_new_user(active_user)?,
            };
            Ok(UserResponse::from(user))
        })
    }
}
