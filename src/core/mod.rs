pub mod habits;
pub mod log;
pub mod table;
pub mod toggle;
pub mod week;
