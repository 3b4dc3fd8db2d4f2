pub mod config;
pub mod db;
pub mod habit;
pub mod init;
pub mod log;
pub mod serve;
pub mod table;
pub mod toggle;
