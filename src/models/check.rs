use chrono::NaiveDate;
use serde::Serialize;

/// One per-day completion record, keyed by (habit_id, check_date).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Check {
    pub habit_id: i64,
    pub check_date: NaiveDate,
    pub done: bool,
}

impl Check {
    pub fn iso_date(&self) -> String {
        self.check_date.format("%Y-%m-%d").to_string()
    }
}
