// src/managers/set_all_received_workouts_seen_manager.rs
use serde_json::json;
use std::sync::Arc;

use super::require_user;
use crate::domain::user::entity::{RECEIVED_WORKOUTS, UNSEEN_RECEIVED_WORKOUTS};
use crate::error::AppResult;
use crate::metrics::{scoped, Metrics};
use crate::repositories::{UpdateItemData, UserRepository};

pub struct SetAllReceivedWorkoutsSeenManager {
    user_repo: Arc<dyn UserRepository>,
    metrics: Arc<dyn Metrics>,
}

impl SetAllReceivedWorkoutsSeenManager {
    pub fn new(user_repo: Arc<dyn UserRepository>, metrics: Arc<dyn Metrics>) -> Self {
        Self { user_repo, metrics }
    }

    /// Mark every received workout of `active_user` as seen in one update
    pub fn set_all_received_workouts_seen(&self, active_user: &str) -> AppResult<()> {
        scoped(
            self.metrics.as_ref(),
            "SetAllReceivedWorkoutsSeenManager.set_all_received_workouts_seen",
            || {
                let mut user = require_user(self.user_repo.as_ref(), active_user)?;
                let flipped = user.set_all_received_workouts_seen();

                let update = UpdateItemData::new(active_user)
                    .set(UNSEEN_RECEIVED_WORKOUTS, json!(0))
                    .set(RECEIVED_WORKOUTS, user.received_workouts_map()?);
                self.user_repo.update_user(&update)?;

                log::debug!("Set {} received workouts seen for {}", flipped, active_user);
                Ok(())
            },
        )
    }
}
