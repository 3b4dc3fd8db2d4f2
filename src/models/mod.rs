pub mod check;
pub mod habit;
pub mod habit_type;
pub mod week;
