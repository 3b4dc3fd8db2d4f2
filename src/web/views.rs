//! Askama page models. Handlers fill these with plain values; markup lives
//! in `templates/`.

use crate::core::habits::RejectReason;
use crate::core::table::WeekTable;
use crate::models::habit::Habit;
use crate::models::week::DayDescriptor;
use askama::Template;

#[derive(Template)]
#[template(path = "index.html")]
pub struct HomePage;

#[derive(Template)]
#[template(path = "system.html")]
pub struct SystemPage;

pub struct HabitRow {
    pub id: i64,
    pub name: String,
    pub kind: &'static str,
}

impl From<&Habit> for HabitRow {
    fn from(h: &Habit) -> Self {
        Self {
            id: h.id,
            name: h.name.clone(),
            kind: h.kind.to_db_str(),
        }
    }
}

#[derive(Template)]
#[template(path = "habits.html")]
pub struct HabitsPage {
    pub habits: Vec<HabitRow>,
    pub notice: Option<String>,
}

/// Query-string code carried across the post/redirect/get cycle of a rejected submission.
pub fn reject_code(reason: &RejectReason) -> &'static str {
    match reason {
        RejectReason::EmptyName => "empty_name",
        RejectReason::UnknownType(_) => "unknown_type",
    }
}

/// Only known codes produce a message; anything else is ignored.
pub fn notice_for(code: Option<&str>) -> Option<String> {
    match code? {
        "empty_name" => Some("Habit not added: the name is empty.".to_string()),
        "unknown_type" => Some("Habit not added: pick either 'start' or 'cut'.".to_string()),
        _ => None,
    }
}

pub struct Cell {
    pub iso: String,
    pub done: bool,
    pub is_today: bool,
}

pub struct GridRow {
    pub id: i64,
    pub name: String,
    pub kind: &'static str,
    pub cells: Vec<Cell>,
    pub done_count: usize,
}

#[derive(Template)]
#[template(path = "table.html")]
pub struct TablePage {
    pub days: Vec<DayDescriptor>,
    pub rows: Vec<GridRow>,
    pub week_start: String,
    pub prev_week: String,
    pub next_week: String,
    pub this_week: String,
}

impl From<WeekTable> for TablePage {
    fn from(table: WeekTable) -> Self {
        let rows = table
            .habits
            .iter()
            .map(|h| GridRow {
                id: h.id,
                name: h.name.clone(),
                kind: h.kind.to_db_str(),
                cells: table
                    .week
                    .days
                    .iter()
                    .map(|d| Cell {
                        iso: d.iso.clone(),
                        done: table.is_done(h.id, &d.iso),
                        is_today: d.is_today,
                    })
                    .collect(),
                done_count: table.done_count(h.id),
            })
            .collect();

        let week = table.week;
        Self {
            days: week.days,
            rows,
            week_start: week.week_start,
            prev_week: week.prev_week,
            next_week: week.next_week,
            this_week: week.this_week,
        }
    }
}
