pub mod calculator;
pub mod config;
pub mod logic;
pub mod schedules;
