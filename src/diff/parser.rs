//! The line-driven state machine that turns diff text into [`ParsedFile`]s.

use super::header::{HeaderField, parse_header_line};
use super::hunk::{HunkCursor, LineOutcome, parse_hunk_header};
use super::model::{FileBuilder, ParsedFile};
use super::paths::{DIFF_GIT_PREFIX, parse_diff_git_line};
use super::sort::sort_files;
use crate::error::ParseError;
use log::{debug, warn};

/// Parse unified diff text, as produced by `git diff`, into per-file records.
///
/// The input is read once, line by line. Unknown lines are skipped, so any
/// text yields some (possibly empty) list. The result is sorted by effective
/// path.
///
/// # Errors
///
/// * [`ParseError::UnterminatedQuotedPath`] - a `diff --git "...` header never closes its quote
/// * [`ParseError::MissingNewPathLine`] - the input ends right after a `---` line
///
/// # Example
///
/// ```
/// let diff = "diff --git a/foo.js b/foo.js\n\
///             --- a/foo.js\n\
///             +++ b/foo.js\n\
///             @@ -1 +1 @@\n\
///             -old\n\
///             +new\n";
/// let files = splitdiff::diff::parse(diff).unwrap();
/// assert_eq!(files[0].additions, 1);
/// assert_eq!(files[0].deletions, 1);
/// ```
pub fn parse(text: &str) -> Result<Vec<ParsedFile>, ParseError> {
    let mut parser = DiffParser::default();
    for (idx, line) in text.lines().enumerate() {
        parser.step(idx + 1, line)?;
    }
    parser.finish()
}

#[derive(Debug, Default)]
enum ScanState {
    /// Before the first file header, or after a binary file.
    #[default]
    Idle,
    /// Between `diff --git` and the `---`/`+++` pair.
    Header,
    /// A `--- <old>` line was read; the `+++` line comes next.
    NewFileMarker { old_source: String, line: usize },
    /// Reading hunk headers and hunk bodies.
    Hunks,
}

#[derive(Debug, Default)]
struct DiffParser {
    state: ScanState,
    files: Vec<ParsedFile>,
    current: Option<FileBuilder>,
    hunk: Option<HunkCursor>,
}

impl DiffParser {
    fn step(&mut self, line_no: usize, line: &str) -> Result<(), ParseError> {
        if let ScanState::NewFileMarker { old_source, .. } = &self.state {
            let new_source = line.get("+++ ".len()..).unwrap_or("");
            if let Some(file) = self.current.as_mut() {
                file.apply_file_markers(old_source, new_source);
            }
            self.state = ScanState::Hunks;
            return Ok(());
        }

        if line.starts_with(DIFF_GIT_PREFIX) {
            self.finish_file();
            let paths = parse_diff_git_line(line)
                .ok_or(ParseError::UnterminatedQuotedPath { line: line_no })?;
            self.current = Some(FileBuilder::new(paths.old_path, paths.new_path));
            self.state = ScanState::Header;
            return Ok(());
        }

        if line.starts_with("Binary") {
            if let Some(file) = self.current.as_mut() {
                file.apply_binary(line);
            }
            self.finish_file();
            self.state = ScanState::Idle;
            return Ok(());
        }

        match self.state {
            ScanState::Header => match parse_header_line(line) {
                HeaderField::OldFileMarker(old_source) => {
                    self.state = ScanState::NewFileMarker {
                        old_source: old_source.to_string(),
                        line: line_no,
                    };
                }
                field => {
                    if let Some(file) = self.current.as_mut() {
                        file.apply_header(field);
                    }
                }
            },
            ScanState::Hunks => self.hunk_line(line_no, line),
            ScanState::Idle | ScanState::NewFileMarker { .. } => {}
        }
        Ok(())
    }

    fn hunk_line(&mut self, line_no: usize, line: &str) {
        if line.starts_with("@@") {
            self.close_hunk();
            match parse_hunk_header(line) {
                Some(hunk) => self.hunk = Some(HunkCursor::new(hunk)),
                None => warn!("line {}: dropping malformed hunk header: {}", line_no, line),
            }
            return;
        }

        let Some(cursor) = self.hunk.as_mut() else {
            debug!("line {}: skipping line outside any hunk", line_no);
            return;
        };

        if let LineOutcome::MissingNewline { old_side, new_side } = cursor.push_line(line)
            && let Some(file) = self.current.as_mut()
        {
            if old_side {
                file.old_ending_new_line = false;
            }
            if new_side {
                file.new_ending_new_line = false;
            }
        }
    }

    fn close_hunk(&mut self) {
        if let Some(cursor) = self.hunk.take()
            && let Some(file) = self.current.as_mut()
        {
            file.hunks.push(cursor.finish());
        }
    }

    fn finish_file(&mut self) {
        self.close_hunk();
        if let Some(file) = self.current.take() {
            let file = file.finish();
            debug!(
                "parsed {} ({}): +{} -{} in {} hunk(s)",
                file.effective_path(),
                file.change_type,
                file.additions,
                file.deletions,
                file.hunks.len()
            );
            self.files.push(file);
        }
    }

    fn finish(mut self) -> Result<Vec<ParsedFile>, ParseError> {
        if let ScanState::NewFileMarker { line, .. } = self.state {
            return Err(ParseError::MissingNewPathLine { line });
        }
        self.finish_file();
        Ok(sort_files(self.files))
    }
}
