pub mod calculator;
pub mod dashboard;
pub mod export;
pub mod layout;
pub mod log;
pub mod session;
pub mod stats;
pub mod tracker;
