//! Header field parsing for the lines between `diff --git` and the first hunk.

use super::model::{ChangeType, FileBuilder};

/// Sentinel path for the side of an add or delete that does not exist.
pub(super) const DEV_NULL: &str = "/dev/null";

/// A recognized header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum HeaderField<'a> {
    /// `new file mode <mode>`
    NewFileMode(&'a str),
    /// `deleted file mode <mode>`
    DeletedFileMode(&'a str),
    /// `old mode <mode>` on a mode-only change.
    OldMode(&'a str),
    /// `new mode <mode>` on a mode-only change.
    NewMode(&'a str),
    /// `similarity index NN%`
    Similarity(u32),
    /// `index <old>..<new>[ <mode>]`
    Index {
        old_revision: &'a str,
        new_revision: &'a str,
        mode: Option<&'a str>,
    },
    /// `rename from|to <path>` or `copy from|to <path>`
    Source {
        kind: ChangeType,
        from: bool,
        path: &'a str,
    },
    /// `--- <old>`; the `+++` line is expected next.
    OldFileMarker(&'a str),
    /// Anything else (`dissimilarity index`, blank lines, unknown keywords).
    Unknown,
}

/// Classify a header line by its leading keyword.
pub(super) fn parse_header_line(line: &str) -> HeaderField<'_> {
    let (keyword, rest) = line.split_once(' ').unwrap_or((line, ""));

    match keyword {
        "new" => {
            if let Some(mode) = rest.strip_prefix("file mode ") {
                HeaderField::NewFileMode(mode)
            } else if let Some(mode) = rest.strip_prefix("mode ") {
                HeaderField::NewMode(mode)
            } else {
                HeaderField::Unknown
            }
        }
        "deleted" => rest
            .strip_prefix("file mode ")
            .map_or(HeaderField::Unknown, HeaderField::DeletedFileMode),
        "old" => rest
            .strip_prefix("mode ")
            .map_or(HeaderField::Unknown, HeaderField::OldMode),
        "similarity" => {
            let value = rest.rsplit(' ').next().unwrap_or("");
            leading_number(value).map_or(HeaderField::Unknown, HeaderField::Similarity)
        }
        "index" => {
            let Some((old_revision, tail)) = rest.split_once("..") else {
                return HeaderField::Unknown;
            };
            let (new_revision, mode) = match tail.split_once(' ') {
                Some((revision, mode)) => (revision, Some(mode)),
                None => (tail, None),
            };
            HeaderField::Index {
                old_revision,
                new_revision,
                mode,
            }
        }
        "rename" | "copy" => {
            let kind = if keyword == "rename" {
                ChangeType::Rename
            } else {
                ChangeType::Copy
            };
            let from = rest.starts_with('f');
            let skip = if from { "from ".len() } else { "to ".len() };
            HeaderField::Source {
                kind,
                from,
                path: rest.get(skip..).unwrap_or(""),
            }
        }
        "---" => HeaderField::OldFileMarker(rest),
        _ => HeaderField::Unknown,
    }
}

impl FileBuilder {
    /// Record a header field on the file under construction.
    pub(super) fn apply_header(&mut self, field: HeaderField<'_>) {
        match field {
            HeaderField::NewFileMode(mode) => {
                self.new_mode = Some(mode.to_string());
                self.mode_type = Some(ChangeType::Add);
            }
            HeaderField::DeletedFileMode(mode) => {
                self.old_mode = Some(mode.to_string());
                self.mode_type = Some(ChangeType::Delete);
            }
            HeaderField::OldMode(mode) => self.old_mode = Some(mode.to_string()),
            HeaderField::NewMode(mode) => self.new_mode = Some(mode.to_string()),
            HeaderField::Similarity(percent) => self.similarity = Some(percent),
            HeaderField::Index {
                old_revision,
                new_revision,
                mode,
            } => {
                self.old_revision = Some(old_revision.to_string());
                self.new_revision = Some(new_revision.to_string());
                if let Some(mode) = mode {
                    self.old_mode = Some(mode.to_string());
                    self.new_mode = Some(mode.to_string());
                }
            }
            HeaderField::Source { kind, from, path } => {
                if from {
                    self.old_path = Some(path.to_string());
                } else {
                    self.new_path = Some(path.to_string());
                }
                self.keyword_type = Some(kind);
            }
            HeaderField::OldFileMarker(_) | HeaderField::Unknown => {}
        }
    }

    /// Apply a `--- <old>` / `+++ <new>` pair.
    ///
    /// Only non-empty resolved paths replace what the `diff --git` line or a
    /// rename/copy line already recorded.
    pub(super) fn apply_file_markers(&mut self, old_source: &str, new_source: &str) {
        let (marker, old_path, new_path) = if old_source == DEV_NULL {
            (ChangeType::Add, "", strip_side_prefix(new_source))
        } else if new_source == DEV_NULL {
            (ChangeType::Delete, strip_side_prefix(old_source), "")
        } else {
            (
                ChangeType::Modify,
                strip_side_prefix(old_source),
                strip_side_prefix(new_source),
            )
        };

        if !old_path.is_empty() {
            self.old_path = Some(old_path.to_string());
        }
        if !new_path.is_empty() {
            self.new_path = Some(new_path.to_string());
        }
        self.marker_type = Some(marker);
    }

    /// Apply a `Binary files <old> and <new> differ` line.
    pub(super) fn apply_binary(&mut self, line: &str) {
        self.is_binary = true;
        self.marker_type = Some(if line.contains("/dev/null and") {
            ChangeType::Add
        } else if line.contains("and /dev/null") {
            ChangeType::Delete
        } else {
            ChangeType::Modify
        });
    }
}

/// Strip the `a/` or `b/` prefix, unwrapping a quoted path first.
fn strip_side_prefix(source: &str) -> &str {
    let source = source
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(source);
    source.get(2..).unwrap_or("")
}

fn leading_number(s: &str) -> Option<u32> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}
