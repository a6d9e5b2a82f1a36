//! Word-level diff inside a pair of related lines.
//!
//! Tokenizes both lines into whitespace-preserving chunks and aligns
//! them with the same LCS walk as the line diff, so callers can
//! highlight exactly which words changed. Pure and total: any pair of
//! strings produces a segment list.

use serde::{Deserialize, Serialize};

use crate::lcs::{self, Step};

/// Classification of one word-diff segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// Present on both sides.
    Equal,
    /// Present only on the right side.
    Add,
    /// Present only on the left side.
    Remove,
}

/// One token of word-diff output.
///
/// Concatenating `text` of all segments with `kind != Remove` yields
/// the right line; all segments with `kind != Add` yield the left line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: SegmentKind,
}

/// Diff two lines at word granularity.
pub fn compute_word_diff(left: &str, right: &str) -> Vec<Segment> {
    let a = tokenize(left);
    let b = tokenize(right);
    let steps = lcs::align(&a, &b);

    let mut segments = Vec::with_capacity(steps.len());
    let (mut i, mut j) = (0usize, 0usize);
    for step in steps {
        match step {
            Step::Match => {
                segments.push(Segment {
                    text: b[j].to_string(),
                    kind: SegmentKind::Equal,
                });
                i += 1;
                j += 1;
            }
            Step::Right => {
                segments.push(Segment {
                    text: b[j].to_string(),
                    kind: SegmentKind::Add,
                });
                j += 1;
            }
            Step::Left => {
                segments.push(Segment {
                    text: a[i].to_string(),
                    kind: SegmentKind::Remove,
                });
                i += 1;
            }
        }
    }
    segments
}

/// Split a line into chunks of a non-whitespace run plus its trailing
/// whitespace; a leading whitespace run forms its own chunk.
/// Concatenating the chunks reconstructs the input exactly.
fn tokenize(s: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut prev_was_ws = false;

    for (idx, ch) in s.char_indices() {
        if prev_was_ws && !ch.is_whitespace() {
            tokens.push(&s[start..idx]);
            start = idx;
        }
        prev_was_ws = ch.is_whitespace();
    }
    if start < s.len() {
        tokens.push(&s[start..]);
    }
    tokens
}
