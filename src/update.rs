//! Update function for the Elm-style architecture
//!
//! All gutter state transformations flow through here.

use crate::commands::Cmd;
use crate::gutter::{clamp_line_count, line_index_from_host};
use crate::messages::GutterMsg;
use crate::model::GutterState;

#[cfg(debug_assertions)]
use crate::tracing::BreakpointSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

/// Main update function
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(state: &mut GutterState, msg: GutterMsg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(state, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(state, msg)
    }
}

fn update_inner(state: &mut GutterState, msg: GutterMsg) -> Option<Cmd> {
    match msg {
        GutterMsg::LineCountChanged(raw) => {
            let line_count = clamp_line_count(raw);
            if line_count == state.line_count() {
                return None;
            }

            let mut cmds: Vec<Cmd> = state
                .set_line_count(line_count)
                .into_iter()
                .map(|line| Cmd::SyncBreakpoint {
                    line,
                    enabled: false,
                })
                .collect();
            cmds.push(Cmd::Redraw);
            Some(batch_or_single(cmds))
        }

        GutterMsg::ToggleBreakpoint(raw) => {
            let line = line_index_from_host(raw)?;
            let enabled = state.toggle_breakpoint(line);
            Some(Cmd::batch(vec![
                Cmd::SyncBreakpoint { line, enabled },
                Cmd::Redraw,
            ]))
        }

        GutterMsg::SetBreakpoint { line, enabled } => {
            let line = line_index_from_host(line)?;
            if !state.set_breakpoint(line, enabled) {
                return None;
            }
            Some(Cmd::batch(vec![
                Cmd::SyncBreakpoint { line, enabled },
                Cmd::Redraw,
            ]))
        }

        GutterMsg::ClearBreakpoints => {
            if !state.clear_breakpoints() {
                return None;
            }
            Some(Cmd::batch(vec![Cmd::ClearCoreBreakpoints, Cmd::Redraw]))
        }

        GutterMsg::SetExecutionLine(line) => {
            if state.execution_line == line {
                return None;
            }
            state.execution_line = line;
            Some(Cmd::Redraw)
        }
    }
}

/// Collapse a command list: a single command is returned as-is
fn batch_or_single(cmds: Vec<Cmd>) -> Cmd {
    let mut flat = Cmd::batch(cmds).flatten();
    match flat.len() {
        0 => Cmd::None,
        1 => flat.pop().unwrap_or_default(),
        _ => Cmd::batch(flat),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after breakpoint state and logs diffs for debugging.
#[cfg(debug_assertions)]
fn update_traced(state: &mut GutterState, msg: GutterMsg) -> Option<Cmd> {
    let msg_name = format!("{:?}", msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = BreakpointSnapshot::from_state(state);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(state, msg);

    let after = BreakpointSnapshot::from_state(state);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "breakpoints", %diff, "state changed");
    }

    state.assert_invariants();

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GutterConfig;

    #[test]
    fn test_toggle_emits_sync_and_redraw() {
        let mut state = GutterState::with_line_count(3, GutterConfig::default());
        let cmd = update(&mut state, GutterMsg::ToggleBreakpoint(1));
        assert_eq!(
            cmd,
            Some(Cmd::Batch(vec![
                Cmd::SyncBreakpoint {
                    line: 1,
                    enabled: true
                },
                Cmd::Redraw
            ]))
        );
        assert!(state.rows()[1].has_breakpoint);
    }

    #[test]
    fn test_negative_toggle_is_ignored() {
        let mut state = GutterState::with_line_count(3, GutterConfig::default());
        assert_eq!(update(&mut state, GutterMsg::ToggleBreakpoint(-1)), None);
        assert!(state.breakpoints().is_empty());
    }

    #[test]
    fn test_unchanged_line_count_is_noop() {
        let mut state = GutterState::with_line_count(3, GutterConfig::default());
        assert_eq!(update(&mut state, GutterMsg::LineCountChanged(3)), None);
    }

    #[test]
    fn test_batch_or_single() {
        assert_eq!(batch_or_single(vec![Cmd::Redraw]), Cmd::Redraw);
        assert_eq!(batch_or_single(vec![Cmd::None]), Cmd::None);
        assert_eq!(
            batch_or_single(vec![Cmd::None, Cmd::batch(vec![Cmd::Redraw])]),
            Cmd::Redraw
        );
        assert_eq!(
            batch_or_single(vec![Cmd::ClearCoreBreakpoints, Cmd::Redraw]),
            Cmd::Batch(vec![Cmd::ClearCoreBreakpoints, Cmd::Redraw])
        );
    }
}
