//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use visim_gutter::{BreakpointSet, GutterConfig, GutterRow, GutterState, ListModel};

/// Create gutter state for `line_count` lines with breakpoints on `lines`
pub fn test_state(line_count: usize, lines: &[usize]) -> GutterState {
    let mut state = GutterState::with_line_count(line_count, GutterConfig::default());
    state.replace_breakpoints(set_of(lines));
    state
}

/// Same as [`test_state`] but with out-of-range pruning enabled
pub fn test_state_pruning(line_count: usize, lines: &[usize]) -> GutterState {
    let mut state = test_state(line_count, lines);
    state.config.prune_out_of_range = true;
    state
}

pub fn set_of(lines: &[usize]) -> BreakpointSet {
    lines.iter().copied().collect()
}

/// Shorthand for building expected rows as `(line_number, has_breakpoint)` pairs
pub fn rows(pairs: &[(usize, bool)]) -> Vec<GutterRow> {
    pairs
        .iter()
        .map(|&(line_number, has_breakpoint)| GutterRow {
            line_number,
            has_breakpoint,
        })
        .collect()
}

/// List model that records every call, standing in for a UI data source
#[derive(Debug, Default)]
pub struct RecordingListModel {
    pub rows: Vec<GutterRow>,
    pub clear_calls: usize,
    pub append_calls: usize,
}

impl ListModel for RecordingListModel {
    fn clear(&mut self) {
        self.clear_calls += 1;
        self.rows.clear();
    }

    fn append(&mut self, row: GutterRow) {
        self.append_calls += 1;
        self.rows.push(row);
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}
