//! Gutter view-model - the editor controller's gutter state
//!
//! Follows the Elm Architecture pattern: state lives here, changes flow
//! through [`crate::update::update`]. Line count and breakpoints are only
//! changed through methods that rebuild the rows, so `rows` never goes stale.

use crate::breakpoints::BreakpointSet;
use crate::config::GutterConfig;
use crate::gutter::{rebuild_gutter, GutterRow};

/// Gutter state for one editor
#[derive(Debug, Clone, Default)]
pub struct GutterState {
    line_count: usize,
    breakpoints: BreakpointSet,
    rows: Vec<GutterRow>,
    /// Line the simulator is currently executing (zero-based), if running
    pub execution_line: Option<usize>,
    pub config: GutterConfig,
}

impl GutterState {
    pub fn new(config: GutterConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Create state for a document of `line_count` lines with rows already built
    pub fn with_line_count(line_count: usize, config: GutterConfig) -> Self {
        let mut state = Self {
            line_count,
            config,
            ..Self::default()
        };
        state.refresh();
        state
    }

    /// Number of lines in the current document
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Lines carrying a breakpoint (zero-based)
    pub fn breakpoints(&self) -> &BreakpointSet {
        &self.breakpoints
    }

    /// Rows bound to the gutter widgets
    pub fn rows(&self) -> &[GutterRow] {
        &self.rows
    }

    /// Change the document line count and rebuild the rows
    ///
    /// With `prune_out_of_range` set, breakpoints past the new end are dropped
    /// and returned in ascending order.
    pub fn set_line_count(&mut self, line_count: usize) -> Vec<usize> {
        self.line_count = line_count;
        let pruned = if self.config.prune_out_of_range {
            self.breakpoints.retain_within(line_count)
        } else {
            Vec::new()
        };
        self.refresh();
        pruned
    }

    /// Flip the breakpoint on `line`, returning `true` if it is now set
    pub fn toggle_breakpoint(&mut self, line: usize) -> bool {
        let enabled = self.breakpoints.toggle_line(line);
        self.refresh();
        enabled
    }

    /// Set or remove the breakpoint on `line`, returning `true` if membership changed
    pub fn set_breakpoint(&mut self, line: usize, enabled: bool) -> bool {
        let changed = self.breakpoints.set(line, enabled);
        if changed {
            self.refresh();
        }
        changed
    }

    /// Remove every breakpoint, returning `false` if there were none
    pub fn clear_breakpoints(&mut self) -> bool {
        if self.breakpoints.is_empty() {
            return false;
        }
        self.breakpoints.clear();
        self.refresh();
        true
    }

    /// Replace the whole breakpoint set (e.g. when the simulator core reloads)
    pub fn replace_breakpoints(&mut self, breakpoints: BreakpointSet) {
        self.breakpoints = breakpoints;
        self.refresh();
    }

    fn refresh(&mut self) {
        rebuild_gutter(self.line_count, &self.breakpoints, &mut self.rows);
    }

    /// Whether execution should pause on `line`
    #[inline]
    pub fn should_stop_at(&self, line: usize) -> bool {
        self.breakpoints.contains(line)
    }

    /// Whether the current execution line has a breakpoint
    pub fn stopped_on_breakpoint(&self) -> bool {
        self.execution_line
            .is_some_and(|line| self.should_stop_at(line))
    }

    /// Gutter rows rendered as text, one per line
    pub fn labels(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.label(&self.config)).collect()
    }

    /// Panic if the rows disagree with the line count or breakpoint set
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        assert_eq!(
            self.rows.len(),
            self.line_count,
            "gutter has {} rows for {} lines",
            self.rows.len(),
            self.line_count
        );
        for (index, row) in self.rows.iter().enumerate() {
            assert_eq!(row.line_number, index + 1, "row {} out of order", index);
            assert_eq!(
                row.has_breakpoint,
                self.breakpoints.contains(index),
                "row {} breakpoint flag is stale",
                index
            );
        }
    }
}
