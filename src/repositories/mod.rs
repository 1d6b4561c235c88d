// src/repositories/mod.rs
//
// Repository layer - the persistence gateway
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - Multi-record changes go through TransactionRepository only

mod item_store;

pub mod transaction_repository;
pub mod update_item;
pub mod user_repository;
pub mod workout_repository;

pub use transaction_repository::{SqliteTransactionRepository, TransactionRepository};
pub use update_item::{FieldAssignment, Table, UpdateItemData, WriteOperation};
pub use user_repository::{SqliteUserRepository, UserRepository};
pub use workout_repository::{SqliteWorkoutRepository, WorkoutRepository};

#[cfg(test)]
pub use transaction_repository::MockTransactionRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
