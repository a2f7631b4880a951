//! Message types for the Elm-style architecture
//!
//! All gutter state changes flow through these messages. Line values arrive
//! as raw host integers and are validated in the update function.

/// Gutter-specific messages (line count changes, breakpoint edits)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GutterMsg {
    /// Document line count changed (raw value from the editor widget)
    LineCountChanged(i64),
    /// Flip the breakpoint on a zero-based line (gutter click)
    ToggleBreakpoint(i64),
    /// Set or remove the breakpoint on a zero-based line
    SetBreakpoint { line: i64, enabled: bool },
    /// Remove every breakpoint
    ClearBreakpoints,
    /// Simulator moved to a new line, or stopped running (`None`)
    SetExecutionLine(Option<usize>),
}
