pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod executor;
pub mod logging;
pub mod registry;
pub mod report;
pub mod ui;
