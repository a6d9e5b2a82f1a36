//! Line-level diff between two document versions.
//!
//! Aligns the two line sequences with an LCS walk and emits one row per
//! aligned unit. Inputs above the configured line ceiling are cut to
//! deterministic proportional prefixes first, with the cut flagged in
//! the stats.

use serde::{Deserialize, Serialize};

use crate::lcs::{self, Step};

/// Classification of one diff row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    /// The line is present and identical on both sides.
    Context,
    /// The line exists only in the current version.
    Addition,
    /// The line exists only in the previous version.
    Removal,
}

/// One aligned unit of line-level comparison.
///
/// Line numbers are 1-based and `None` on the side that has no
/// corresponding line; that side's text is the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRow {
    #[serde(rename = "type")]
    pub kind: RowKind,
    pub left_line: Option<u32>,
    pub right_line: Option<u32>,
    pub left_text: String,
    pub right_text: String,
}

/// Row counts for a computed diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub additions: usize,
    pub removals: usize,
    pub unchanged: usize,
    /// Set when the inputs were cut to fit the line ceiling.
    pub truncated: bool,
}

/// Output of [`compute_line_diff`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineDiff {
    pub rows: Vec<DiffRow>,
    pub stats: DiffStats,
}

/// Diff two line sequences under a combined line-count ceiling.
///
/// When `previous.len() + current.len()` exceeds the ceiling, each side
/// is cut to its proportional share of the ceiling (previous keeps
/// `len * ceiling / total` lines, current keeps the remainder) before
/// the alignment runs, and `stats.truncated` is set. The emitted row
/// count never exceeds the ceiling.
pub fn compute_line_diff(previous: &[&str], current: &[&str], ceiling: usize) -> LineDiff {
    let total = previous.len() + current.len();
    let truncated = total > ceiling;

    let (left, right) = if truncated {
        let keep_left = (previous.len() * ceiling / total).min(previous.len());
        let keep_right = (ceiling - keep_left).min(current.len());
        (&previous[..keep_left], &current[..keep_right])
    } else {
        (previous, current)
    };

    let steps = lcs::align(left, right);

    let mut rows = Vec::with_capacity(steps.len());
    let mut stats = DiffStats {
        truncated,
        ..DiffStats::default()
    };
    let (mut left_line, mut right_line) = (0u32, 0u32);
    let (mut i, mut j) = (0usize, 0usize);

    for step in steps {
        match step {
            Step::Match => {
                left_line += 1;
                right_line += 1;
                stats.unchanged += 1;
                rows.push(DiffRow {
                    kind: RowKind::Context,
                    left_line: Some(left_line),
                    right_line: Some(right_line),
                    left_text: left[i].to_string(),
                    right_text: right[j].to_string(),
                });
                i += 1;
                j += 1;
            }
            Step::Right => {
                right_line += 1;
                stats.additions += 1;
                rows.push(DiffRow {
                    kind: RowKind::Addition,
                    left_line: None,
                    right_line: Some(right_line),
                    left_text: String::new(),
                    right_text: right[j].to_string(),
                });
                j += 1;
            }
            Step::Left => {
                left_line += 1;
                stats.removals += 1;
                rows.push(DiffRow {
                    kind: RowKind::Removal,
                    left_line: Some(left_line),
                    right_line: None,
                    left_text: left[i].to_string(),
                    right_text: String::new(),
                });
                i += 1;
            }
        }
    }

    LineDiff { rows, stats }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CEILING: usize = 1000;

    #[test]
    fn test_identical_inputs_are_all_context() {
        let lines = ["alpha", "beta", "gamma"];
        let diff = compute_line_diff(&lines, &lines, CEILING);

        assert!(diff.rows.iter().all(|r| r.kind == RowKind::Context));
        assert_eq!(diff.stats.additions, 0);
        assert_eq!(diff.stats.removals, 0);
        assert_eq!(diff.stats.unchanged, 3);
        assert!(!diff.stats.truncated);
    }

    #[test]
    fn test_empty_previous_is_all_additions() {
        let diff = compute_line_diff(&[], &["one", "two"], CEILING);

        assert!(diff.rows.iter().all(|r| r.kind == RowKind::Addition));
        assert!(diff.rows.iter().all(|r| r.left_line.is_none()));
        assert_eq!(diff.stats.additions, 2);
        assert_eq!(
            diff.rows.iter().map(|r| r.right_line).collect::<Vec<_>>(),
            vec![Some(1), Some(2)]
        );
    }

    #[test]
    fn test_empty_current_is_all_removals() {
        let diff = compute_line_diff(&["one", "two"], &[], CEILING);

        assert!(diff.rows.iter().all(|r| r.kind == RowKind::Removal));
        assert!(diff.rows.iter().all(|r| r.right_line.is_none()));
        assert_eq!(diff.stats.removals, 2);
    }

    #[test]
    fn test_single_line_replacement() {
        let diff = compute_line_diff(
            &["alpha", "beta", "gamma"],
            &["alpha", "beta two", "gamma"],
            CEILING,
        );

        // Addition before removal on the tie, context around it.
        let kinds: Vec<RowKind> = diff.rows.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RowKind::Context,
                RowKind::Addition,
                RowKind::Removal,
                RowKind::Context,
            ]
        );
        assert_eq!(diff.rows[1].right_text, "beta two");
        assert_eq!(diff.rows[2].left_text, "beta");
        assert_eq!(diff.stats.additions, 1);
        assert_eq!(diff.stats.removals, 1);
        assert_eq!(diff.stats.unchanged, 2);
    }

    #[test]
    fn test_line_numbers_advance_per_side() {
        let diff = compute_line_diff(&["a", "b", "c"], &["a", "c"], CEILING);

        // "b" was removed: left numbering covers 1..=3, right 1..=2.
        let left: Vec<Option<u32>> = diff.rows.iter().map(|r| r.left_line).collect();
        let right: Vec<Option<u32>> = diff.rows.iter().map(|r| r.right_line).collect();
        assert_eq!(left, vec![Some(1), Some(2), Some(3)]);
        assert_eq!(right, vec![Some(1), None, Some(2)]);
    }

    #[test]
    fn test_round_trip_reconstruction() {
        let previous = ["intro", "methods", "results", "discussion"];
        let current = ["intro", "related work", "methods", "discussion"];
        let diff = compute_line_diff(&previous, &current, CEILING);

        let left: Vec<&str> = diff
            .rows
            .iter()
            .filter(|r| r.left_line.is_some())
            .map(|r| r.left_text.as_str())
            .collect();
        let right: Vec<&str> = diff
            .rows
            .iter()
            .filter(|r| r.right_line.is_some())
            .map(|r| r.right_text.as_str())
            .collect();
        assert_eq!(left, previous);
        assert_eq!(right, current);
    }

    #[test]
    fn test_truncation_sets_flag_and_bounds_rows() {
        let previous: Vec<String> = (0..30).map(|i| format!("old {}", i)).collect();
        let current: Vec<String> = (0..10).map(|i| format!("new {}", i)).collect();
        let prev_refs: Vec<&str> = previous.iter().map(String::as_str).collect();
        let cur_refs: Vec<&str> = current.iter().map(String::as_str).collect();

        let diff = compute_line_diff(&prev_refs, &cur_refs, 20);

        assert!(diff.stats.truncated);
        assert!(diff.rows.len() <= 20);
        // Proportional cut: previous keeps 30 * 20 / 40 = 15 lines.
        let max_left = diff.rows.iter().filter_map(|r| r.left_line).max();
        assert_eq!(max_left, Some(15));
    }

    #[test]
    fn test_zero_ceiling_yields_no_rows() {
        let diff = compute_line_diff(&["a"], &["b"], 0);
        assert!(diff.rows.is_empty());
        assert!(diff.stats.truncated);
    }

    #[test]
    fn test_row_wire_format() {
        let diff = compute_line_diff(&[], &["only"], CEILING);
        let value = serde_json::to_value(&diff.rows[0]).unwrap();
        assert_eq!(value["type"], "addition");
        assert_eq!(value["left_line"], serde_json::Value::Null);
        assert_eq!(value["right_line"], 1);
        assert_eq!(value["left_text"], "");
        assert_eq!(value["right_text"], "only");
    }
}
