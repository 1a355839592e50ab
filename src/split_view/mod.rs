//! Side-by-side ("split view") projection of a parsed file.
//!
//! Deletions go in the left column and insertions in the right column.
//! Context lines go in both. The other column gets an empty placeholder row,
//! so both columns always have the same length.

use crate::diff::{Change, ParsedFile};
use serde::{Deserialize, Serialize};


/// Content shown on both sides for a binary file.
pub const BINARY_PLACEHOLDER: &str = "// Binary file";

/// Kind of a split-view cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Insert,
    Delete,
    Normal,
    /// Placeholder aligned against a change on the other side.
    Empty,
}

/// One cell of a split-view column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitViewRow {
    pub content: String,
    pub kind: RowKind,
    pub line_number: Option<u32>,
}

impl SplitViewRow {
    fn line(content: &str, kind: RowKind, line_number: u32) -> Self {
        Self {
            content: content.to_string(),
            kind,
            line_number: Some(line_number),
        }
    }

    fn empty() -> Self {
        Self {
            content: String::new(),
            kind: RowKind::Empty,
            line_number: None,
        }
    }
}

/// Two aligned columns: `left` is the old file, `right` the new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitView {
    pub left: Vec<SplitViewRow>,
    pub right: Vec<SplitViewRow>,
    pub total_lines: usize,
}

/// Project one parsed file into a split view.
///
/// Binary files yield a single placeholder row on each side.
pub fn to_split_view(file: &ParsedFile) -> SplitView {
    if file.is_binary {
        let placeholder = SplitViewRow::line(BINARY_PLACEHOLDER, RowKind::Normal, 1);
        return SplitView {
            left: vec![placeholder.clone()],
            right: vec![placeholder],
            total_lines: 1,
        };
    }

    let capacity = file.total_lines;
    let mut left = Vec::with_capacity(capacity);
    let mut right = Vec::with_capacity(capacity);

    for change in file.hunks.iter().flat_map(|hunk| &hunk.changes) {
        let (old_row, new_row) = match change {
            Change::Normal {
                content,
                old_line_number,
                new_line_number,
            } => (
                SplitViewRow::line(content, RowKind::Normal, *old_line_number),
                SplitViewRow::line(content, RowKind::Normal, *new_line_number),
            ),
            Change::Delete {
                content,
                line_number,
            } => (
                SplitViewRow::line(content, RowKind::Delete, *line_number),
                SplitViewRow::empty(),
            ),
            Change::Insert {
                content,
                line_number,
            } => (
                SplitViewRow::empty(),
                SplitViewRow::line(content, RowKind::Insert, *line_number),
            ),
        };
        left.push(old_row);
        right.push(new_row);
    }

    let total_lines = left.len().max(right.len());
    SplitView {
        left,
        right,
        total_lines,
    }
}

/// Project every file; output order matches input order.
pub fn to_split_views(files: &[ParsedFile]) -> Vec<SplitView> {
    files.iter().map(to_split_view).collect()
}
