// src/managers/new_user_manager.rs
use std::sync::Arc;

use crate::domain::{default_exercises, User};
use crate::error::AppResult;
use crate::metrics::{scoped, Metrics};
use crate::repositories::UserRepository;

pub struct NewUserManager {
    user_repo: Arc<dyn UserRepository>,
    metrics: Arc<dyn Metrics>,
}

impl NewUserManager {
    pub fn new(user_repo: Arc<dyn UserRepository>, metrics: Arc<dyn Metrics>) -> Self {
        Self { user_repo, metrics }
    }

    /// Provision a user record seeded with the default exercise catalog
    pub fn create_new_user(&self, username: &str) -> AppResult<User> {
        scoped(self.metrics.as_ref(), "NewUserManager.create_new_user", || {
            let mut user = User::new(username.to_string());
            user.exercises = default_exercises();

            self.user_repo.put_user(&user)?;
            log::info!("Created user {}", username);
            Ok(user)
        })
    }
}
