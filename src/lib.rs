pub mod cli;
pub mod clipboard;
pub mod config;
pub mod export;
pub mod logging;
pub mod service;
pub mod ui;
pub mod workflow;
