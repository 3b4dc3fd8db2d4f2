use crate::db::log::hlog;
use crate::db::pool::DbPool;
use crate::db::queries::{find_habit, toggle_check};
use crate::errors::{AppError, AppResult};
use crate::utils::date::to_iso;
use chrono::NaiveDate;
use rusqlite::TransactionBehavior;

pub struct ToggleLogic;

impl ToggleLogic {
    /// Flip the completion state of `habit_id` on `date`.
    ///
    /// A missing check row is "not yet marked": the first toggle stores done,
    /// every later toggle flips the stored value. Returns the new state.
    pub fn apply(pool: &mut DbPool, habit_id: i64, date: NaiveDate) -> AppResult<bool> {
        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        if find_habit(&tx, habit_id)?.is_none() {
            return Err(AppError::HabitNotFound(habit_id));
        }

        let done = toggle_check(&tx, habit_id, date)?;

        hlog(
            &tx,
            "toggle",
            &format!("habit #{}", habit_id),
            &format!(
                "{} marked {}",
                to_iso(date),
                if done { "done" } else { "not done" }
            ),
        )?;

        tx.commit()?;
        Ok(done)
    }
}
