use crate::db::log::hlog;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, params};

const UNIQUE_CHECKS_VERSION: &str = "20240610_0002_unique_check_per_day";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn index_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='index' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        params![Local::now().to_rfc3339(), version, message],
    )?;
    Ok(())
}

/// Create the `habits` table.
fn create_habits_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS habits (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            name  TEXT NOT NULL,
            type  TEXT NOT NULL CHECK(type IN ('start','cut'))
        );
        "#,
    )?;
    Ok(())
}

/// Create the `checks` table, one row per (habit, day).
fn create_checks_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS checks (
            habit_id   INTEGER NOT NULL REFERENCES habits(id),
            check_date TEXT NOT NULL,
            done       INTEGER NOT NULL DEFAULT 0 CHECK(done IN (0,1))
        );

        CREATE INDEX IF NOT EXISTS idx_checks_date ON checks(check_date);
        "#,
    )?;
    Ok(())
}

/// Databases created before the unique key may hold duplicated
/// (habit_id, check_date) rows. Keep the most recently written one
/// and then enforce uniqueness so the toggle upsert has a conflict target.
fn migrate_unique_check_per_day(conn: &Connection) -> Result<()> {
    if index_exists(conn, "idx_checks_habit_date")? {
        if !migration_applied(conn, UNIQUE_CHECKS_VERSION)? {
            mark_applied(conn, UNIQUE_CHECKS_VERSION, "Unique key already present")?;
        }
        return Ok(());
    }

    let removed = conn.execute(
        "DELETE FROM checks
         WHERE rowid NOT IN (
             SELECT MAX(rowid) FROM checks GROUP BY habit_id, check_date
         )",
        [],
    )?;

    if removed > 0 {
        warning(format!(
            "Removed {} duplicated check row(s) before adding the unique key.",
            removed
        ));
    }

    conn.execute_batch(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_checks_habit_date ON checks(habit_id, check_date);",
    )?;

    mark_applied(
        conn,
        UNIQUE_CHECKS_VERSION,
        &format!("Unique (habit_id, check_date) key added, {} duplicate(s) removed", removed),
    )?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db(). Safe to call on every start.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Core tables
    let fresh = !table_exists(conn, "habits")?;
    create_habits_table(conn)?;
    create_checks_table(conn)?;

    if fresh
        && let Err(e) = hlog(conn, "init", "schema", "Created habits and checks tables")
    {
        warning(format!("Failed to write internal log: {}", e));
    }

    // 3) One check per habit per day
    migrate_unique_check_per_day(conn)?;

    Ok(())
}
