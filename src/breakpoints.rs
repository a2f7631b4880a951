//! Breakpoint membership for editor lines
//!
//! A line either has a breakpoint or it doesn't. The set only stores the
//! lines that have one, so there is no way to record an "off" entry.

use std::collections::BTreeSet;

/// Set of zero-based line indices carrying a breakpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreakpointSet {
    lines: BTreeSet<usize>,
}

impl BreakpointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the breakpoint on `line`, returning the same set for chaining
    ///
    /// Any index is accepted, including ones past the end of the document.
    pub fn toggle(&mut self, line: usize) -> &mut Self {
        self.toggle_line(line);
        self
    }

    /// Flip the breakpoint on `line` and report the new state
    ///
    /// Returns `true` if the line now has a breakpoint, `false` if it was removed.
    pub fn toggle_line(&mut self, line: usize) -> bool {
        if self.lines.remove(&line) {
            tracing::debug!(target: "breakpoints", line, "breakpoint removed");
            false
        } else {
            self.lines.insert(line);
            tracing::debug!(target: "breakpoints", line, "breakpoint set");
            true
        }
    }

    /// Set or remove the breakpoint on `line`
    ///
    /// Returns `true` if membership changed. Enabling an existing breakpoint
    /// or disabling an absent one is a no-op.
    pub fn set(&mut self, line: usize, enabled: bool) -> bool {
        let changed = if enabled {
            self.lines.insert(line)
        } else {
            self.lines.remove(&line)
        };
        if changed {
            tracing::debug!(target: "breakpoints", line, enabled, "breakpoint changed");
        }
        changed
    }

    #[inline]
    pub fn contains(&self, line: usize) -> bool {
        self.lines.contains(&line)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Breakpoint lines in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.lines.iter().copied()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Drop every breakpoint at or past `line_count`
    ///
    /// Returns the removed lines in ascending order.
    pub fn retain_within(&mut self, line_count: usize) -> Vec<usize> {
        let removed: Vec<usize> = self.lines.split_off(&line_count).into_iter().collect();
        if !removed.is_empty() {
            tracing::debug!(
                target: "breakpoints",
                line_count,
                removed = removed.len(),
                "pruned out-of-range breakpoints"
            );
        }
        removed
    }
}

impl FromIterator<usize> for BreakpointSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl Extend<usize> for BreakpointSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        self.lines.extend(iter);
    }
}

impl<'a> IntoIterator for &'a BreakpointSet {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter().copied()
    }
}

/// Flip the breakpoint on `line_index` in place and hand the set back
pub fn toggle_breakpoint(breakpoints: &mut BreakpointSet, line_index: usize) -> &mut BreakpointSet {
    breakpoints.toggle(line_index)
}
