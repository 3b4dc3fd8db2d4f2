use crate::core::week::resolve_week;
use crate::db::pool::DbPool;
use crate::db::queries::{HabitOrder, load_checks_in_range, load_habits};
use crate::errors::{AppError, AppResult};
use crate::models::habit::Habit;
use crate::models::week::WeekWindow;
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Everything the weekly grid needs: the resolved window, the habit rows and
/// the done state of every cell that has a check row.
#[derive(Debug, Clone)]
pub struct WeekTable {
    pub week: WeekWindow,
    pub habits: Vec<Habit>,
    done: HashMap<(i64, String), bool>,
}

impl WeekTable {
    /// Resolve `week_input` against `today` and hydrate the grid with a
    /// single range query over the window.
    pub fn load(pool: &mut DbPool, week_input: Option<&str>, today: NaiveDate) -> AppResult<Self> {
        let week = resolve_week(week_input, today);

        let start = parse_date(week.start_iso())
            .ok_or_else(|| AppError::InvalidDate(week.start_iso().to_string()))?;
        let end = parse_date(week.end_iso())
            .ok_or_else(|| AppError::InvalidDate(week.end_iso().to_string()))?;

        let habits = load_habits(&pool.conn, HabitOrder::IdAsc)?;
        let checks = load_checks_in_range(&pool.conn, start, end)?;

        let done = checks
            .into_iter()
            .map(|c| ((c.habit_id, c.iso_date()), c.done))
            .collect();

        Ok(Self { week, habits, done })
    }

    /// Done state of one cell; cells without a check row are not done.
    pub fn is_done(&self, habit_id: i64, iso: &str) -> bool {
        self.done
            .get(&(habit_id, iso.to_string()))
            .copied()
            .unwrap_or(false)
    }

    /// Row-major done flags, one row per habit, one column per weekday.
    pub fn grid(&self) -> Vec<Vec<bool>> {
        self.habits
            .iter()
            .map(|h| {
                self.week
                    .days
                    .iter()
                    .map(|d| self.is_done(h.id, &d.iso))
                    .collect()
            })
            .collect()
    }

    /// Number of days marked done for a habit in this window.
    pub fn done_count(&self, habit_id: i64) -> usize {
        self.week
            .days
            .iter()
            .filter(|d| self.is_done(habit_id, &d.iso))
            .count()
    }
}
