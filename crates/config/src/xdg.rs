//! Per-user directories for tallypad.
//!
//! | Kind   | Linux default              | Holds                     |
//! |--------|----------------------------|---------------------------|
//! | config | `~/.config/tallypad`       | `config.toml`, `themes/`  |
//! | data   | `~/.local/share/tallypad`  | `preferences.toml`        |
//! | cache  | `~/.cache/tallypad`        | `tallypad.log`            |
//!
//! The `XDG_*_HOME` variables override the defaults.

use anyhow::{anyhow, Result};
use std::path::PathBuf;

const APP_DIR_NAME: &str = "tallypad";

fn app_dir(base: Option<PathBuf>, kind: &str) -> Result<PathBuf> {
    base.map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| anyhow!("No {} directory for this user", kind))
}

pub fn get_config_dir() -> Result<PathBuf> {
    app_dir(dirs::config_dir(), "config")
}

pub fn get_data_dir() -> Result<PathBuf> {
    app_dir(dirs::data_dir(), "data")
}

pub fn get_cache_dir() -> Result<PathBuf> {
    app_dir(dirs::cache_dir(), "cache")
}
