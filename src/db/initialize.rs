use crate::db::migrate::run_pending_migrations;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

/// Initialize the database.
/// All schema (event, event_member, ban, log) comes from migrations.
/// Returns a description of every migration applied now.
pub fn init_db(conn: &Connection) -> AppResult<Vec<String>> {
    let applied =
        run_pending_migrations(conn).map_err(|e| AppError::Migration(e.to_string()))?;
    Ok(applied
        .into_iter()
        .map(|(version, message)| format!("{} → {}", version, message))
        .collect())
}
