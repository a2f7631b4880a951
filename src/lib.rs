//! Line-number gutter and breakpoint state for the simulator's code editor
//!
//! This crate rebuilds the gutter rows the editor view renders and keeps the
//! set of lines carrying breakpoints, following the Elm Architecture pattern.

pub mod breakpoints;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod gutter;
pub mod messages;
pub mod model;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use breakpoints::{toggle_breakpoint, BreakpointSet};
pub use commands::Cmd;
pub use config::GutterConfig;
pub use gutter::{gutter_rows, rebuild_gutter, GutterRow, ListModel};
pub use messages::GutterMsg;
pub use model::GutterState;
pub use update::update;
