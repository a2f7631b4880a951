//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! breakpoint and gutter state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=breakpoints=debug,message=debug` - scoped filtering
//! - `RUST_LOG=visim_gutter::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! [`init`] writes logs to `<config dir>/logs/gutter.log` with daily rotation,
//! always at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::breakpoints::BreakpointSet;
use crate::model::GutterState;

/// Install the global tracing subscriber with console and file logging
///
/// Meant to be called once by the host application at startup. Console output
/// respects RUST_LOG, defaulting to `warn`. The file layer writes to
/// `<config dir>/logs/gutter.log` with daily rotation; if the logs directory
/// can't be created, only the console layer is installed.
///
/// Returns an error instead of panicking if a global subscriber is already set.
pub fn init() -> Result<(), String> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // Debug level regardless of RUST_LOG
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "gutter.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: gutter file logging disabled: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| format!("Failed to install tracing subscriber: {}", e))
}

/// Lightweight snapshot of gutter state for diffing
#[derive(Debug, Clone)]
pub struct BreakpointSnapshot {
    pub line_count: usize,
    pub breakpoints: BreakpointSet,
    pub execution_line: Option<usize>,
}

impl BreakpointSnapshot {
    pub fn from_state(state: &GutterState) -> Self {
        Self {
            line_count: state.line_count(),
            breakpoints: state.breakpoints().clone(),
            execution_line: state.execution_line,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &BreakpointSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.line_count != other.line_count {
            changes.push(format!(
                "line count: {} → {}",
                self.line_count, other.line_count
            ));
        }

        let added: Vec<String> = other
            .breakpoints
            .iter()
            .filter(|line| !self.breakpoints.contains(*line))
            .map(|line| line.to_string())
            .collect();
        if !added.is_empty() {
            changes.push(format!("+bp [{}]", added.join(", ")));
        }

        let removed: Vec<String> = self
            .breakpoints
            .iter()
            .filter(|line| !other.breakpoints.contains(*line))
            .map(|line| line.to_string())
            .collect();
        if !removed.is_empty() {
            changes.push(format!("-bp [{}]", removed.join(", ")));
        }

        if self.execution_line != other.execution_line {
            changes.push(format!(
                "exec: {:?} → {:?}",
                self.execution_line, other.execution_line
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
