//! Hunk header and change line parsing.

use super::model::{Change, Hunk};
use regex::Regex;
use std::sync::LazyLock;

static HUNK_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@\s+-([0-9]+)(?:,([0-9]+))?\s+\+([0-9]+)(?:,([0-9]+))?")
        .expect("Invalid hunk header regex")
});

/// Parse a hunk header line into an empty [`Hunk`].
///
/// Format: `@@ -old_start[,old_lines] +new_start[,new_lines] @@ [context]`.
/// A missing count defaults to 1. Returns `None` if the line does not match
/// or a number does not fit in a `u32`.
pub(super) fn parse_hunk_header(line: &str) -> Option<Hunk> {
    let caps = HUNK_HEADER_REGEX.captures(line)?;
    let number = |idx: usize| -> Option<u32> {
        match caps.get(idx) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(1),
        }
    };

    Some(Hunk {
        content: line.to_string(),
        old_start: caps[1].parse().ok()?,
        old_lines: number(2)?,
        new_start: caps[3].parse().ok()?,
        new_lines: number(4)?,
        changes: Vec::new(),
    })
}

/// What a body line did to the open hunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum LineOutcome {
    /// A change was appended.
    Recorded,
    /// A `\ No newline at end of file` marker for the given sides.
    MissingNewline { old_side: bool, new_side: bool },
    /// Not a hunk body line.
    Ignored,
}

/// An open hunk plus its running old/new line counters.
#[derive(Debug)]
pub(super) struct HunkCursor {
    pub hunk: Hunk,
    old_line: u32,
    new_line: u32,
}

impl HunkCursor {
    pub fn new(hunk: Hunk) -> Self {
        Self {
            old_line: hunk.old_start,
            new_line: hunk.new_start,
            hunk,
        }
    }

    /// Consume one body line of the hunk.
    pub fn push_line(&mut self, line: &str) -> LineOutcome {
        let mut chars = line.chars();
        let Some(marker) = chars.next() else {
            return LineOutcome::Ignored;
        };
        let content = chars.as_str().to_string();

        let change = match marker {
            '+' => {
                let change = Change::Insert {
                    content,
                    line_number: self.new_line,
                };
                self.new_line = self.new_line.saturating_add(1);
                change
            }
            '-' => {
                let change = Change::Delete {
                    content,
                    line_number: self.old_line,
                };
                self.old_line = self.old_line.saturating_add(1);
                change
            }
            ' ' => {
                let change = Change::Normal {
                    content,
                    old_line_number: self.old_line,
                    new_line_number: self.new_line,
                };
                self.old_line = self.old_line.saturating_add(1);
                self.new_line = self.new_line.saturating_add(1);
                change
            }
            '\\' => {
                // The marker refers to whichever side(s) the previous line belongs to.
                return match self.hunk.changes.last() {
                    Some(last) => LineOutcome::MissingNewline {
                        old_side: !last.is_insert(),
                        new_side: !last.is_delete(),
                    },
                    None => LineOutcome::Ignored,
                };
            }
            _ => return LineOutcome::Ignored,
        };

        self.hunk.changes.push(change);
        LineOutcome::Recorded
    }

    pub fn finish(self) -> Hunk {
        self.hunk
    }
}
