#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rhabits::db::initialize::init_db;
use rhabits::db::pool::DbPool;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rhb() -> Command {
    cargo_bin_cmd!("rhabits")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rhabits.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh in-memory store with the schema in place
pub fn memory_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    pool
}

/// Initialize a DB file through the CLI (test mode: no config file is written)
pub fn init_via_cli(db_path: &str) {
    rhb()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}
