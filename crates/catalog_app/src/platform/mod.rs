//! Terminal front end: wires the core state machine to the engine.
mod app;
mod config;
mod effects;
mod ui;

pub use app::run_app;
