// src/repositories/item_store.rs
//
// Document load/store shared by every SQLite repository. Functions take a
// plain connection so they run the same inside or outside a transaction.

use chrono::Utc;
use rusqlite::{params, Connection};
use serde_json::Value;

use super::update_item::{Table, UpdateItemData, WriteOperation};
use crate::error::{AppError, AppResult};

pub(crate) fn load_item(conn: &Connection, table: Table, key: &str) -> AppResult<Option<Value>> {
    let sql = format!(
        "SELECT item FROM {} WHERE {} = ?1",
        table.name(),
        table.key_column()
    );
    let mut stmt = conn.prepare(&sql)?;

    match stmt.query_row(params![key], |row| row.get::<_, String>(0)) {
        Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(AppError::Database(e)),
    }
}

pub(crate) fn store_item(conn: &Connection, table: Table, key: &str, item: &Value) -> AppResult<()> {
    let sql = format!(
        "INSERT OR REPLACE INTO {} ({}, item, updated_at) VALUES (?1, ?2, ?3)",
        table.name(),
        table.key_column()
    );
    conn.execute(
        &sql,
        params![key, serde_json::to_string(item)?, Utc::now().to_rfc3339()],
    )?;
    Ok(())
}

/// Read-modify-write of one record. The record must already exist.
pub(crate) fn apply_update(conn: &Connection, table: Table, update: &UpdateItemData) -> AppResult<()> {
    let mut item = load_item(conn, table, &update.key)?.ok_or_else(|| {
        AppError::NotFound(format!("{} record {} not found.", table, update.key))
    })?;
    update.apply_to(&mut item)?;
    store_item(conn, table, &update.key, &item)
}

pub(crate) fn apply_write(conn: &Connection, operation: &WriteOperation) -> AppResult<()> {
    match operation {
        WriteOperation::Put { table, key, item } => store_item(conn, *table, key, item),
        WriteOperation::Update { table, update } => apply_update(conn, *table, update),
    }
}
