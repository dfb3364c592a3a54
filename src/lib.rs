pub mod api;
pub mod cli;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod ui;
