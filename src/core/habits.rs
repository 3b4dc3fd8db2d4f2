use crate::db::log::hlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    HabitOrder, delete_checks_for_habit, delete_habit_row, insert_habit, load_habits,
};
use crate::errors::AppResult;
use crate::models::habit::Habit;
use crate::models::habit_type::HabitType;
use rusqlite::TransactionBehavior;
use std::fmt;

/// Why a habit submission was not stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    EmptyName,
    UnknownType(String),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::EmptyName => write!(f, "habit name is empty"),
            RejectReason::UnknownType(t) => {
                write!(f, "unknown habit type '{}' (use 'start' or 'cut')", t)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(Habit),
    Rejected(RejectReason),
}

impl CreateOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, CreateOutcome::Created(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub checks_removed: usize,
    pub habit_removed: bool,
}

/// Validate a raw submission without touching the store.
/// The name is trimmed; the type is trimmed then matched exactly.
pub fn validate(name: &str, kind: &str) -> Result<(String, HabitType), RejectReason> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RejectReason::EmptyName);
    }

    let kind = kind.trim();
    let kind = HabitType::from_db_str(kind).ok_or_else(|| RejectReason::UnknownType(kind.into()))?;

    Ok((name.to_string(), kind))
}

pub struct HabitLogic;

impl HabitLogic {
    /// Store a new habit. Invalid input is reported, not raised:
    /// nothing is written and the reason comes back in the outcome.
    pub fn create(pool: &mut DbPool, name: &str, kind: &str) -> AppResult<CreateOutcome> {
        let (name, kind) = match validate(name, kind) {
            Ok(v) => v,
            Err(reason) => return Ok(CreateOutcome::Rejected(reason)),
        };

        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let habit = insert_habit(&tx, &name, kind)?;

        hlog(
            &tx,
            "add",
            &format!("habit #{}", habit.id),
            &format!("Added habit '{}' ({})", habit.name, kind.to_db_str()),
        )?;

        tx.commit()?;
        Ok(CreateOutcome::Created(habit))
    }

    pub fn list(pool: &mut DbPool, order: HabitOrder) -> AppResult<Vec<Habit>> {
        load_habits(&pool.conn, order)
    }

    /// Delete a habit together with all of its checks.
    /// Checks go first, then the habit row, inside one transaction.
    /// An unknown id is a no-op.
    pub fn delete(pool: &mut DbPool, habit_id: i64) -> AppResult<DeleteOutcome> {
        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let checks_removed = delete_checks_for_habit(&tx, habit_id)?;
        let habit_removed = delete_habit_row(&tx, habit_id)?;

        if habit_removed || checks_removed > 0 {
            hlog(
                &tx,
                "del",
                &format!("habit #{}", habit_id),
                &format!("Deleted habit and {} check(s)", checks_removed),
            )?;
        }

        tx.commit()?;

        Ok(DeleteOutcome {
            checks_removed,
            habit_removed,
        })
    }
}
