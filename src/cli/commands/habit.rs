use crate::cli::parser::{Commands, HabitAction};
use crate::config::Config;
use crate::core::habits::{CreateOutcome, HabitLogic};
use crate::db::pool::DbPool;
use crate::db::queries::HabitOrder;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::table::{Column, Table};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Habit { action } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        HabitAction::Add { name, kind } => match HabitLogic::create(&mut pool, name, kind)? {
            CreateOutcome::Created(h) => {
                success(format!(
                    "Added habit #{} '{}' ({})",
                    h.id,
                    h.name,
                    h.kind.to_db_str()
                ));
            }
            CreateOutcome::Rejected(reason) => {
                warning(format!("Habit not added: {}", reason));
            }
        },

        HabitAction::List { json } => {
            let habits = HabitLogic::list(&mut pool, HabitOrder::IdDesc)?;

            if *json {
                let out = serde_json::to_string_pretty(&habits)
                    .map_err(|e| AppError::Other(e.to_string()))?;
                println!("{}", out);
                return Ok(());
            }

            if habits.is_empty() {
                info("No habits yet. Add one with `rhabits habit add <name> --type start|cut`.");
                return Ok(());
            }

            let name_w = habits
                .iter()
                .map(|h| h.name.chars().count())
                .max()
                .unwrap_or(4)
                .max(4);

            let mut table = Table::new(vec![
                Column {
                    header: "ID".into(),
                    width: 5,
                },
                Column {
                    header: "NAME".into(),
                    width: name_w,
                },
                Column {
                    header: "TYPE".into(),
                    width: 5,
                },
            ]);

            for h in &habits {
                table.add_row(vec![
                    h.id.to_string(),
                    h.name.clone(),
                    h.kind.to_db_str().to_string(),
                ]);
            }

            print!("{}", table.render());
        }

        HabitAction::Del { id, yes } => {
            if !*yes
                && !ask_confirmation(&format!(
                    "Delete habit #{} and all of its checks? This action is irreversible.",
                    id
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }

            let outcome = HabitLogic::delete(&mut pool, *id)?;

            if outcome.habit_removed {
                success(format!(
                    "Habit #{} deleted ({} check(s) removed).",
                    id, outcome.checks_removed
                ));
            } else {
                info(format!("No habit with id {}; nothing deleted.", id));
            }
        }
    }

    Ok(())
}
