// src/repositories/user_repository.rs
//
// User persistence

use std::sync::Arc;

use rusqlite::TransactionBehavior;

use super::item_store::{apply_update, load_item, store_item};
use super::update_item::{Table, UpdateItemData};
use crate::db::{get_connection, ConnectionPool};
use crate::domain::{Model, User};
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn get_user(&self, username: &str) -> AppResult<Option<User>>;
    fn put_user(&self, user: &User) -> AppResult<()>;
    /// Single-record field update. The user must exist.
    fn update_user(&self, update: &UpdateItemData) -> AppResult<()>;
}

pub struct SqliteUserRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteUserRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    fn get_user(&self, username: &str) -> AppResult<Option<User>> {
        let conn = get_connection(&self.pool)?;
        match load_item(&conn, Table::Users, username)? {
            Some(item) => Ok(Some(serde_json::from_value(item)?)),
            None => Ok(None),
        }
    }

    fn put_user(&self, user: &User) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;
        store_item(&conn, Table::Users, &user.username, &user.as_value()?)
    }

    fn update_user(&self, update: &UpdateItemData) -> AppResult<()> {
        let mut conn = get_connection(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        apply_update(&tx, Table::Users, update)?;
        tx.commit()?;

        log::debug!(
            "Updated user {} ({} assignments)",
            update.key,
            update.assignments.len()
        );
        Ok(())
    }
}
