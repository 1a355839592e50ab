//! Parsed diff data model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a file was changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Add,
    Delete,
    #[default]
    Modify,
    Rename,
    Copy,
}

impl ChangeType {
    /// Human-readable label ("Added", "Deleted", ...).
    pub fn label(&self) -> &'static str {
        match self {
            ChangeType::Add => "Added",
            ChangeType::Delete => "Deleted",
            ChangeType::Modify => "Modified",
            ChangeType::Rename => "Renamed",
            ChangeType::Copy => "Copied",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single line inside a hunk.
///
/// Content never includes the leading `+`, `-` or space marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Change {
    /// Line present only in the new file.
    Insert { content: String, line_number: u32 },
    /// Line present only in the old file.
    Delete { content: String, line_number: u32 },
    /// Context line present in both files.
    Normal {
        content: String,
        old_line_number: u32,
        new_line_number: u32,
    },
}

impl Change {
    pub fn content(&self) -> &str {
        match self {
            Change::Insert { content, .. }
            | Change::Delete { content, .. }
            | Change::Normal { content, .. } => content,
        }
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Change::Insert { .. })
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Change::Delete { .. })
    }
}

/// One `@@ -a,b +c,d @@` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunk {
    /// The raw header line, including any trailing function context.
    pub content: String,
    /// First old-file line covered (1-based, 0 for an empty side).
    pub old_start: u32,
    /// First new-file line covered (1-based, 0 for an empty side).
    pub new_start: u32,
    pub old_lines: u32,
    pub new_lines: u32,
    pub changes: Vec<Change>,
}

/// One file touched by a diff.
///
/// The side that does not exist for an add or delete has an empty path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFile {
    pub old_path: String,
    pub new_path: String,
    pub change_type: ChangeType,
    pub hunks: Vec<Hunk>,
    /// False when the old file lacks a trailing newline.
    pub old_ending_new_line: bool,
    /// False when the new file lacks a trailing newline.
    pub new_ending_new_line: bool,
    pub additions: usize,
    pub deletions: usize,
    /// Count of every change line across all hunks.
    pub total_lines: usize,
    /// Similarity percentage, only reported for renames and copies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_revision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_revision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_mode: Option<String>,
    pub is_binary: bool,
    pub old_file_ext: String,
    pub new_file_ext: String,
    /// Last path segment of the effective path.
    pub name: String,
}

impl ParsedFile {
    /// The path used for display and ordering: old path for deletes, new path otherwise.
    pub fn effective_path(&self) -> &str {
        if self.change_type == ChangeType::Delete {
            &self.old_path
        } else {
            &self.new_path
        }
    }
}

/// A file whose header and hunks are still being read.
///
/// Paths stay optional and the change type stays undecided until the file
/// is finalized into a [`ParsedFile`].
#[derive(Debug, Default)]
pub(super) struct FileBuilder {
    pub old_path: Option<String>,
    pub new_path: Option<String>,
    /// Set by `rename`/`copy` header lines.
    pub keyword_type: Option<ChangeType>,
    /// Set by the `---`/`+++` pair or a `Binary files` line.
    pub marker_type: Option<ChangeType>,
    /// Set by `new file mode`/`deleted file mode` lines.
    pub mode_type: Option<ChangeType>,
    pub hunks: Vec<Hunk>,
    pub old_ending_new_line: bool,
    pub new_ending_new_line: bool,
    pub similarity: Option<u32>,
    pub old_revision: Option<String>,
    pub new_revision: Option<String>,
    pub old_mode: Option<String>,
    pub new_mode: Option<String>,
    pub is_binary: bool,
}

impl FileBuilder {
    pub fn new(old_path: String, new_path: String) -> Self {
        Self {
            old_path: Some(old_path),
            new_path: Some(new_path),
            old_ending_new_line: true,
            new_ending_new_line: true,
            ..Self::default()
        }
    }

    /// Resolve the final change type.
    ///
    /// Precedence: rename/copy keyword, then `---`/`+++` (or binary) markers,
    /// then file-mode lines, then modify.
    pub fn resolved_type(&self) -> ChangeType {
        self.keyword_type
            .or(self.marker_type)
            .or(self.mode_type)
            .unwrap_or_default()
    }
}
