pub mod add;
pub mod boards;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod log;
pub mod reminder;
pub mod spots;
pub mod stats;
