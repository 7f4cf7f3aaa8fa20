//! Configuration module
//!
//! Handles:
//! - Tool configuration (`~/.rush/config.toml`, `RUSH_*` variables)
//! - Resolving the settings directory

mod settings;

pub use settings::*;
