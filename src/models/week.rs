use serde::Serialize;

/// A single column of the weekly grid.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DayDescriptor {
    /// e.g. "Mon Jun 10"
    pub label: String,
    /// ISO-8601 date, e.g. "2024-06-10"
    pub iso: String,
    pub is_today: bool,
}

/// Monday-anchored 7-day window plus the navigation anchors around it.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct WeekWindow {
    pub days: Vec<DayDescriptor>,
    pub week_start: String,
    pub prev_week: String,
    pub next_week: String,
    pub this_week: String,
}

impl WeekWindow {
    /// First day of the window (always a Monday).
    pub fn start_iso(&self) -> &str {
        &self.days[0].iso
    }

    /// Last day of the window (always a Sunday).
    pub fn end_iso(&self) -> &str {
        &self.days[self.days.len() - 1].iso
    }
}
