// src/repositories/transaction_repository.rs
//
// Atomic multi-record writes. Either every operation commits or none does.

use std::sync::Arc;

use rusqlite::TransactionBehavior;

use super::item_store::apply_write;
use super::update_item::WriteOperation;
use crate::db::{get_connection, ConnectionPool};
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait TransactionRepository: Send + Sync {
    fn execute_write_transaction(&self, operations: &[WriteOperation]) -> AppResult<()>;
}

pub struct SqliteTransactionRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteTransactionRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl TransactionRepository for SqliteTransactionRepository {
    fn execute_write_transaction(&self, operations: &[WriteOperation]) -> AppResult<()> {
        let mut conn = get_connection(&self.pool)?;
        // Dropping the transaction without commit rolls back every write
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        for operation in operations {
            if let Err(e) = apply_write(&tx, operation) {
                log::warn!(
                    "Rolling back transaction at {} {}: {}",
                    operation.table(),
                    operation.key(),
                    e
                );
                return Err(e);
            }
        }
        tx.commit()?;

        log::debug!("Committed transaction of {} writes", operations.len());
        Ok(())
    }
}
