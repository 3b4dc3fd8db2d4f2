use crate::models::habit_type::HabitType;
use serde::Serialize;

/// A tracked habit as stored in the `habits` table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Habit {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: HabitType,
}
