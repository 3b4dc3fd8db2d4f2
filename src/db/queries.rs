use crate::errors::{AppError, AppResult};
use crate::models::check::Check;
use crate::models::habit::Habit;
use crate::models::habit_type::HabitType;
use crate::utils::date::{ISO_FORMAT, to_iso};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// Sort order for habit listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HabitOrder {
    /// Oldest first (weekly grid rows).
    IdAsc,
    /// Newest first (management view).
    IdDesc,
}

pub fn map_habit(row: &Row) -> Result<Habit> {
    let kind_str: String = row.get("type")?;
    let kind = HabitType::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidHabitType(kind_str.clone())),
        )
    })?;

    Ok(Habit {
        id: row.get("id")?,
        name: row.get("name")?,
        kind,
    })
}

pub fn map_check(row: &Row) -> Result<Check> {
    let date_str: String = row.get("check_date")?;

    let check_date = NaiveDate::parse_from_str(&date_str, ISO_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(Check {
        habit_id: row.get("habit_id")?,
        check_date,
        done: row.get::<_, i64>("done")? == 1,
    })
}

/// Insert a habit and return it with the store-assigned id.
pub fn insert_habit(conn: &Connection, name: &str, kind: HabitType) -> AppResult<Habit> {
    conn.execute(
        "INSERT INTO habits (name, type) VALUES (?1, ?2)",
        params![name, kind.to_db_str()],
    )?;

    Ok(Habit {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
        kind,
    })
}

pub fn load_habits(conn: &Connection, order: HabitOrder) -> AppResult<Vec<Habit>> {
    let sql = match order {
        HabitOrder::IdAsc => "SELECT id, name, type FROM habits ORDER BY id ASC",
        HabitOrder::IdDesc => "SELECT id, name, type FROM habits ORDER BY id DESC",
    };

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], map_habit)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_habit(conn: &Connection, id: i64) -> AppResult<Option<Habit>> {
    let habit = conn
        .query_row(
            "SELECT id, name, type FROM habits WHERE id = ?1",
            [id],
            map_habit,
        )
        .optional()?;
    Ok(habit)
}

/// Remove every check referencing `habit_id`. Returns the number of rows removed.
pub fn delete_checks_for_habit(conn: &Connection, habit_id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM checks WHERE habit_id = ?1", [habit_id])?;
    Ok(n)
}

/// Returns true when a habit row was actually removed.
pub fn delete_habit_row(conn: &Connection, habit_id: i64) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM habits WHERE id = ?1", [habit_id])?;
    Ok(n > 0)
}

pub fn find_check(conn: &Connection, habit_id: i64, date: NaiveDate) -> AppResult<Option<Check>> {
    let check = conn
        .query_row(
            "SELECT habit_id, check_date, done FROM checks
             WHERE habit_id = ?1 AND check_date = ?2",
            params![habit_id, to_iso(date)],
            map_check,
        )
        .optional()?;
    Ok(check)
}

/// Flip the done flag for (habit_id, date), creating the row as done on first use.
///
/// Single upsert against the unique (habit_id, check_date) key: there is no
/// separate read, so concurrent toggles cannot create a second row.
/// Returns the stored state after the flip.
pub fn toggle_check(conn: &Connection, habit_id: i64, date: NaiveDate) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO checks (habit_id, check_date, done) VALUES (?1, ?2, 1)
         ON CONFLICT(habit_id, check_date) DO UPDATE SET done = CASE WHEN done = 1 THEN 0 ELSE 1 END
         RETURNING done",
    )?;

    let done: i64 = stmt.query_row(params![habit_id, to_iso(date)], |row| row.get(0))?;
    Ok(done == 1)
}

/// All checks whose date lies in the closed range `[start, end]`, across habits.
pub fn load_checks_in_range(
    conn: &Connection,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<Check>> {
    let mut stmt = conn.prepare(
        "SELECT habit_id, check_date, done
         FROM checks
         WHERE check_date >= ?1 AND check_date <= ?2
         ORDER BY check_date ASC, habit_id ASC",
    )?;

    let rows = stmt.query_map(params![to_iso(start), to_iso(end)], map_check)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
