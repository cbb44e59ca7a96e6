pub mod add;
pub mod aliases;
pub mod brush;
pub mod config;
pub mod db;
pub mod del;
pub mod import;
pub mod init;
pub mod log;
pub mod stats;
pub mod top;
