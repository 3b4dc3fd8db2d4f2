use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::toggle::ToggleLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Toggle {
        habit_id,
        date: date_str,
    } = cmd
    {
        let d = date::parse_date(date_str.trim())
            .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;

        let mut pool = DbPool::new(&cfg.database)?;
        let done = ToggleLogic::apply(&mut pool, *habit_id, d)?;

        success(format!(
            "Habit #{} on {}: {}",
            habit_id,
            date::to_iso(d),
            if done { "done" } else { "not done" }
        ));
    }

    Ok(())
}
