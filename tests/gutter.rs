//! Gutter rebuild tests
//!
//! Row count, ordering, and breakpoint flags produced by a full rebuild.

mod common;

use common::{rows, set_of, RecordingListModel};
use visim_gutter::gutter::{clamp_line_count, line_index_from_host};
use visim_gutter::{gutter_rows, rebuild_gutter, BreakpointSet, GutterRow, ListModel};

// ========================================================================
// Rebuild Scenarios
// ========================================================================

#[test]
fn test_three_lines_with_middle_breakpoint() {
    let mut model: Vec<GutterRow> = Vec::new();
    rebuild_gutter(3, &set_of(&[1]), &mut model);

    assert_eq!(model, rows(&[(1, false), (2, true), (3, false)]));
}

#[test]
fn test_zero_lines_yields_empty_model() {
    let mut model = gutter_rows(5, &BreakpointSet::new());
    rebuild_gutter(0, &set_of(&[0, 1, 2]), &mut model);

    assert!(model.is_empty());
}

#[test]
fn test_negative_line_count_from_host_yields_empty_model() {
    let mut model = gutter_rows(5, &BreakpointSet::new());
    rebuild_gutter(clamp_line_count(-3), &set_of(&[0]), &mut model);

    assert!(model.is_empty());
}

#[test]
fn test_breakpoints_past_end_are_not_shown() {
    let model = gutter_rows(2, &set_of(&[1, 5, 100]));

    assert_eq!(model, rows(&[(1, false), (2, true)]));
}

#[test]
fn test_rebuild_is_full_replacement() {
    let mut model = RecordingListModel::default();
    rebuild_gutter(4, &BreakpointSet::new(), &mut model);
    rebuild_gutter(2, &set_of(&[0]), &mut model);

    assert_eq!(model.clear_calls, 2);
    assert_eq!(model.append_calls, 6);
    assert_eq!(model.rows, rows(&[(1, true), (2, false)]));
}

#[test]
fn test_rebuild_works_through_trait_object() {
    let mut model = RecordingListModel::default();
    let dyn_model: &mut dyn ListModel = &mut model;
    rebuild_gutter(3, &set_of(&[2]), &mut *dyn_model);

    assert_eq!(dyn_model.len(), 3);
    assert!(model.rows[2].has_breakpoint);
}

// ========================================================================
// Properties over small inputs
// ========================================================================

#[test]
fn test_row_count_and_order_for_all_small_counts() {
    let breakpoints = set_of(&[0, 3, 7, 20]);
    for line_count in 0..50 {
        let model = gutter_rows(line_count, &breakpoints);
        assert_eq!(model.len(), line_count);
        for (index, row) in model.iter().enumerate() {
            assert_eq!(row.line_number, index + 1);
        }
    }
}

#[test]
fn test_flag_matches_membership_for_every_row() {
    // Every subset of the first 8 lines
    for mask in 0u32..256 {
        let lines: Vec<usize> = (0..8).filter(|bit| mask & (1 << bit) != 0).collect();
        let breakpoints = set_of(&lines);
        let model = gutter_rows(8, &breakpoints);

        for (index, row) in model.iter().enumerate() {
            assert_eq!(
                row.has_breakpoint,
                breakpoints.contains(index),
                "mask {:#010b}, row {}",
                mask,
                index
            );
        }
    }
}

// ========================================================================
// Host Boundary
// ========================================================================

#[test]
fn test_clamp_line_count_extremes() {
    assert_eq!(clamp_line_count(i64::MIN), 0);
    assert_eq!(clamp_line_count(-1), 0);
    assert_eq!(clamp_line_count(1), 1);
}

#[test]
fn test_line_index_from_host_rejects_negative() {
    assert_eq!(line_index_from_host(i64::MIN), None);
    assert_eq!(line_index_from_host(-1), None);
    assert_eq!(line_index_from_host(3), Some(3));
}
