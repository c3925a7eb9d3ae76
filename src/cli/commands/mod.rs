pub mod config;
pub mod dashboard;
pub mod db;
pub mod export;
pub mod init;
pub mod log;
pub mod session;
pub mod stats;
pub mod track;
pub mod widget;
