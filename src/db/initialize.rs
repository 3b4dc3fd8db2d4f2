use crate::db::migrate::run_pending_migrations;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

/// Bring the schema up to date. Safe to call before every command.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn).map_err(|e| AppError::Migration(e.to_string()))
}

/// Consistency of the habit/check data beyond what SQLite's own
/// integrity check covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SchemaHealth {
    /// Checks whose habit no longer exists.
    pub orphan_checks: i64,
    /// Extra rows for a (habit_id, check_date) pair that already has one.
    pub duplicate_checks: i64,
}

impl SchemaHealth {
    pub fn is_clean(&self) -> bool {
        self.orphan_checks == 0 && self.duplicate_checks == 0
    }
}

pub fn check_schema(conn: &Connection) -> AppResult<SchemaHealth> {
    let orphan_checks: i64 = conn.query_row(
        "SELECT COUNT(*) FROM checks c
         LEFT JOIN habits h ON h.id = c.habit_id
         WHERE h.id IS NULL",
        [],
        |row| row.get(0),
    )?;

    let duplicate_checks: i64 = conn.query_row(
        "SELECT COALESCE(SUM(n - 1), 0) FROM (
             SELECT COUNT(*) AS n FROM checks
             GROUP BY habit_id, check_date
             HAVING n > 1
         )",
        [],
        |row| row.get(0),
    )?;

    Ok(SchemaHealth {
        orphan_checks,
        duplicate_checks,
    })
}
