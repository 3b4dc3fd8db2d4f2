use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::web;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { bind } = cmd {
        let addr = bind.clone().unwrap_or_else(|| cfg.bind.clone());

        web::init_tracing();

        // schema bootstrap once, before accepting requests
        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;
        drop(pool);

        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| AppError::Server(format!("cannot start runtime: {}", e)))?;

        runtime.block_on(web::serve(&addr, cfg.database.clone()))?;
    }

    Ok(())
}
