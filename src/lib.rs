pub mod battery;
pub mod cli;
pub mod config;
pub mod error;
pub mod harness;
pub mod report;
