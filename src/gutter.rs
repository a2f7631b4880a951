//! Line-number gutter rows
//!
//! The gutter list is owned by the rendering layer. This module only clears
//! and repopulates it from the document line count and the breakpoint set.

use crate::breakpoints::BreakpointSet;
use crate::config::GutterConfig;

/// One row of the line-number gutter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GutterRow {
    /// 1-based line number shown to the user
    pub line_number: usize,
    /// Whether a breakpoint marker is drawn next to the number
    pub has_breakpoint: bool,
}

impl GutterRow {
    /// Row for a zero-based line index
    pub fn for_line(line_index: usize, breakpoints: &BreakpointSet) -> Self {
        Self {
            line_number: line_index + 1,
            has_breakpoint: breakpoints.contains(line_index),
        }
    }

    /// Zero-based index of the line this row describes
    ///
    /// A row built by hand with `line_number: 0` maps to index 0.
    #[inline]
    pub fn line_index(&self) -> usize {
        self.line_number.saturating_sub(1)
    }

    /// Render the row as gutter text: marker column, then the right-aligned number
    ///
    /// With the default config line 2 renders as `"●    2 "` or `"     2 "`.
    pub fn label(&self, config: &GutterConfig) -> String {
        let marker = if self.has_breakpoint {
            config.breakpoint_marker
        } else {
            ' '
        };
        format!(
            "{} {:>width$} ",
            marker,
            self.line_number,
            width = config.number_width
        )
    }
}

/// Ordered list the UI binds gutter widgets to
///
/// Implemented by whatever data source the rendering layer uses.
pub trait ListModel {
    /// Discard every row
    fn clear(&mut self);
    /// Append a row at the end
    fn append(&mut self, row: GutterRow);
    /// Number of rows currently held
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ListModel for Vec<GutterRow> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn append(&mut self, row: GutterRow) {
        self.push(row);
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// Replace the contents of `model` with one row per document line
///
/// Always a full rebuild: the model is cleared, then `line_count` rows are
/// appended in ascending line order.
pub fn rebuild_gutter<M>(line_count: usize, breakpoints: &BreakpointSet, model: &mut M)
where
    M: ListModel + ?Sized,
{
    model.clear();
    for line_index in 0..line_count {
        model.append(GutterRow::for_line(line_index, breakpoints));
    }
}

/// Build a fresh row list for `line_count` lines
pub fn gutter_rows(line_count: usize, breakpoints: &BreakpointSet) -> Vec<GutterRow> {
    let mut rows = Vec::with_capacity(line_count);
    rebuild_gutter(line_count, breakpoints, &mut rows);
    rows
}

/// Convert a line count reported by the host UI
///
/// Negative counts are clamped to zero, which yields an empty gutter.
pub fn clamp_line_count(raw: i64) -> usize {
    if raw < 0 {
        tracing::warn!(raw, "negative line count from host, clamping to 0");
        return 0;
    }
    usize::try_from(raw).unwrap_or(usize::MAX)
}

/// Convert a line index reported by the host UI
///
/// Negative indices cannot name a line and are rejected.
pub fn line_index_from_host(raw: i64) -> Option<usize> {
    match usize::try_from(raw) {
        Ok(index) => Some(index),
        Err(_) => {
            tracing::warn!(raw, "invalid line index from host, ignoring");
            None
        }
    }
}
