//! XDG-style path utilities for the configuration directory.
//!
//! Paths follow XDG Base Directory conventions on every platform rather
//! than OS-specific locations.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "gtrans";

/// Returns the configuration directory for gtrans.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/gtrans` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/gtrans` otherwise
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join(APP_DIR));
    }
    Ok(home_dir()?.join(".config").join(APP_DIR))
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
