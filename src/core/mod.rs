pub mod calculator;
pub mod config;
