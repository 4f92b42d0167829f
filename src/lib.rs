pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod layout;
pub mod logging;
pub mod overlay;
pub mod state;
pub mod update;
