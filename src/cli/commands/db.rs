use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::{check_schema, init_db};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    if *migrate {
        println!("{}▶ Bringing the habits schema up to date…{}", CYAN, RESET);
        init_db(&pool.conn)?;
        println!("{}✔ Schema is current.{}\n", GREEN, RESET);
    }

    if *info {
        stats::print_db_info(&mut pool, &cfg.database)?;
    }

    if *check {
        println!("{}▶ Checking database…{}", CYAN, RESET);

        let integrity: String = pool
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

        if integrity == "ok" {
            println!("{}✔ Integrity check passed.{}", GREEN, RESET);
        } else {
            println!("{}✘ Integrity check failed:{} {}", RED, RESET, integrity);
        }

        let health = check_schema(&pool.conn)?;
        if health.is_clean() {
            println!("{}✔ No orphan or duplicated checks.{}\n", GREEN, RESET);
        } else {
            if health.orphan_checks > 0 {
                println!(
                    "{}⚠ {} check(s) point to a missing habit.{}",
                    YELLOW, health.orphan_checks, RESET
                );
            }
            if health.duplicate_checks > 0 {
                println!(
                    "{}⚠ {} duplicated (habit, day) check row(s); run `rhabits db --migrate`.{}",
                    YELLOW, health.duplicate_checks, RESET
                );
            }
            println!();
        }
    }

    if *vacuum {
        println!("{}▶ Running VACUUM…{}", CYAN, RESET);
        pool.conn.execute_batch("VACUUM;")?;
        println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
    }

    Ok(())
}
