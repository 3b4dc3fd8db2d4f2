//! rHabits library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (week resolution, habit/check store access, web surface).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;
pub mod web;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use db::initialize::init_db;
use db::pool::DbPool;
use errors::AppResult;

/// Make sure the schema exists before a command touches it.
fn bootstrap(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Serve { .. } => cli::commands::serve::handle(&cli.command, cfg),
        Commands::Log { .. } => {
            bootstrap(cfg)?;
            cli::commands::log::handle(&cli.command, cfg)
        }
        Commands::Habit { .. } => {
            bootstrap(cfg)?;
            cli::commands::habit::handle(&cli.command, cfg)
        }
        Commands::Table { .. } => {
            bootstrap(cfg)?;
            cli::commands::table::handle(&cli.command, cfg)
        }
        Commands::Toggle { .. } => {
            bootstrap(cfg)?;
            cli::commands::toggle::handle(&cli.command, cfg)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load the config once; an explicit --db always wins
    let mut cfg = Config::load()?;

    let database = match &cli.db {
        Some(custom_db) => Config::resolve_database(custom_db)?,
        None => utils::path::expand_tilde(&cfg.database),
    };
    cfg.database = database.to_string_lossy().to_string();

    dispatch(&cli, &cfg)
}
