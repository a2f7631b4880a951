//! Gutter configuration persistence
//!
//! Stores gutter preferences in `~/.config/risc-visim/gutter.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Gutter configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GutterConfig {
    /// Minimum width of the line number column, in characters
    #[serde(default = "default_number_width")]
    pub number_width: usize,

    /// Character drawn in the marker column for lines with a breakpoint
    #[serde(default = "default_breakpoint_marker")]
    pub breakpoint_marker: char,

    /// Drop breakpoints that fall past the end of the document when it shrinks
    #[serde(default)]
    pub prune_out_of_range: bool,
}

fn default_number_width() -> usize {
    4
}

fn default_breakpoint_marker() -> char {
    '●'
}

impl Default for GutterConfig {
    fn default() -> Self {
        Self {
            number_width: default_number_width(),
            breakpoint_marker: default_breakpoint_marker(),
            prune_out_of_range: false,
        }
    }
}

impl GutterConfig {
    /// Load config from the user config directory, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the user config directory
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
