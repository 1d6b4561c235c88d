// src/repositories/workout_repository.rs
//
// Workout persistence

use std::sync::Arc;

use rusqlite::TransactionBehavior;

use super::item_store::{apply_update, load_item, store_item};
use super::update_item::{Table, UpdateItemData};
use crate::db::{get_connection, ConnectionPool};
use crate::domain::{Model, Workout};
use crate::error::AppResult;

pub trait WorkoutRepository: Send + Sync {
    fn get_workout(&self, workout_id: &str) -> AppResult<Option<Workout>>;
    fn put_workout(&self, workout: &Workout) -> AppResult<()>;
    /// Single-record field update. The workout must exist.
    fn update_workout(&self, update: &UpdateItemData) -> AppResult<()>;
}

pub struct SqliteWorkoutRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteWorkoutRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl WorkoutRepository for SqliteWorkoutRepository {
    fn get_workout(&self, workout_id: &str) -> AppResult<Option<Workout>> {
        let conn = get_connection(&self.pool)?;
        match load_item(&conn, Table::Workouts, workout_id)? {
            Some(item) => Ok(Some(serde_json::from_value(item)?)),
            None => Ok(None),
        }
    }

    fn put_workout(&self, workout: &Workout) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;
        store_item(&conn, Table::Workouts, &workout.workout_id, &workout.as_value()?)
    }

    fn update_workout(&self, update: &UpdateItemData) -> AppResult<()> {
        let mut conn = get_connection(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        apply_update(&tx, Table::Workouts, update)?;
        tx.commit()?;
        Ok(())
    }
}
