/*
[INPUT]:  Module declarations for the taskboard application crate
[OUTPUT]: Dashboard, CLI and configuration modules used by the binary
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod tui;
pub mod ui;

pub use app::state::{AppState, Store};
pub use config::AppConfig;
