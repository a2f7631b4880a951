//! Where the gutter keeps its config and log files
//!
//! Everything sits in the simulator's shared `risc-visim` directory:
//! `gutter.yaml` for [`crate::config::GutterConfig`] and `logs/` for the
//! rolling file written by [`crate::tracing::init`].

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "risc-visim";

/// Simulator config directory, if the platform has one
///
/// `$XDG_CONFIG_HOME/risc-visim`, falling back to `~/.config/risc-visim`.
/// On Windows: `%APPDATA%\risc-visim`.
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// Gutter settings file
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("gutter.yaml"))
}

/// Directory holding `gutter.log.YYYY-MM-DD` files
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create logs directory {}: {}", logs.display(), e))?;
    Ok(logs)
}
