use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) COUNTS
    //
    let habits: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM habits", [], |row| row.get(0))?;
    let checks: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM checks", [], |row| row.get(0))?;
    let done: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM checks WHERE done = 1",
        [],
        |row| row.get(0),
    )?;

    println!("{}• Habits:{} {}{}{}", CYAN, RESET, GREEN, habits, RESET);
    println!(
        "{}• Checks:{} {} ({}{}{} done)",
        CYAN, RESET, checks, GREEN, done, RESET
    );

    //
    // 3) DATE RANGE
    //
    let range: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row(
            "SELECT MIN(check_date), MAX(check_date) FROM checks",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    let (first, last) = range.unwrap_or((None, None));
    let placeholder = || format!("{GREY}--{RESET}");

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", first.unwrap_or_else(placeholder));
    println!("    to:   {}", last.unwrap_or_else(placeholder));

    println!();
    Ok(())
}
