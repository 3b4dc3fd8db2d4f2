use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::table::WeekTable;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::colors::{CYAN, GREY, RESET};
use crate::utils::date::today;
use crate::utils::table::{Column, Table};
use serde_json::json;

const DONE_MARK: &str = "✔";
const TODO_MARK: &str = "·";

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Table { week, json } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;
    let table = WeekTable::load(&mut pool, week.as_deref(), today())?;

    if *json {
        let habits: Vec<_> = table
            .habits
            .iter()
            .zip(table.grid())
            .map(|(h, done)| {
                json!({
                    "id": h.id,
                    "name": h.name,
                    "type": h.kind.to_db_str(),
                    "done": done,
                })
            })
            .collect();

        let out = json!({
            "week": table.week,
            "habits": habits,
        });

        let text =
            serde_json::to_string_pretty(&out).map_err(|e| AppError::Other(e.to_string()))?;
        println!("{}", text);
        return Ok(());
    }

    let w = &table.week;
    println!(
        "{}Week of {}{}   (prev: {}  next: {}  this week: {})\n",
        CYAN, w.week_start, RESET, w.prev_week, w.next_week, w.this_week
    );

    if table.habits.is_empty() {
        info("No habits yet. Add one with `rhabits habit add <name> --type start|cut`.");
        return Ok(());
    }

    let name_w = table
        .habits
        .iter()
        .map(|h| h.name.chars().count() + h.id.to_string().len() + 2)
        .max()
        .unwrap_or(5)
        .max(5);

    let mut columns = vec![Column {
        header: "HABIT".into(),
        width: name_w,
    }];
    for d in &w.days {
        let header = if d.is_today {
            format!("*{}", d.label)
        } else {
            d.label.clone()
        };
        columns.push(Column {
            width: header.chars().count(),
            header,
        });
    }
    columns.push(Column {
        header: "DONE".into(),
        width: 4,
    });

    let mut out = Table::new(columns);
    for (h, row) in table.habits.iter().zip(table.grid()) {
        let mut cells = vec![format!("#{} {}", h.id, h.name)];
        cells.extend(
            row.iter()
                .map(|done| (if *done { DONE_MARK } else { TODO_MARK }).to_string()),
        );
        cells.push(format!("{}/7", table.done_count(h.id)));
        out.add_row(cells);
    }

    print!("{}", out.render());
    println!("\n{}* today{}", GREY, RESET);

    Ok(())
}
