//! Per-file finalization: change type, paths and derived statistics.

use super::model::{ChangeType, FileBuilder, ParsedFile};

impl FileBuilder {
    /// Freeze the file into a [`ParsedFile`], computing its statistics.
    pub(super) fn finish(self) -> ParsedFile {
        let change_type = self.resolved_type();

        let mut old_path = self.old_path.unwrap_or_default();
        let mut new_path = self.new_path.unwrap_or_default();
        match change_type {
            ChangeType::Add => old_path.clear(),
            ChangeType::Delete => new_path.clear(),
            _ => {}
        }

        let mut additions = 0;
        let mut deletions = 0;
        let mut total_lines = 0;
        for change in self.hunks.iter().flat_map(|hunk| &hunk.changes) {
            total_lines += 1;
            if change.is_insert() {
                additions += 1;
            } else if change.is_delete() {
                deletions += 1;
            }
        }

        let name = display_name(if change_type == ChangeType::Delete {
            &old_path
        } else {
            &new_path
        });

        ParsedFile {
            old_file_ext: file_ext(&old_path),
            new_file_ext: file_ext(&new_path),
            name,
            old_path,
            new_path,
            change_type,
            hunks: self.hunks,
            old_ending_new_line: self.old_ending_new_line,
            new_ending_new_line: self.new_ending_new_line,
            additions,
            deletions,
            total_lines,
            similarity: self.similarity,
            old_revision: self.old_revision,
            new_revision: self.new_revision,
            old_mode: self.old_mode,
            new_mode: self.new_mode,
            is_binary: self.is_binary,
        }
    }
}

/// Lowercased extension of the final path segment, or empty.
pub(super) fn file_ext(path: &str) -> String {
    display_name(path)
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}

/// Last `/`-delimited segment of a path.
pub(super) fn display_name(path: &str) -> String {
    path.rsplit('/').next().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::hunk::{HunkCursor, parse_hunk_header};

    #[test]
    fn test_file_ext() {
        assert_eq!(file_ext("src/Main.RS"), "rs");
        assert_eq!(file_ext("archive.tar.gz"), "gz");
        assert_eq!(file_ext("Makefile"), "");
        assert_eq!(file_ext("conf.d/Makefile"), "");
        assert_eq!(file_ext(".gitignore"), "gitignore");
        assert_eq!(file_ext(""), "");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("src/diff/parser.rs"), "parser.rs");
        assert_eq!(display_name("README.md"), "README.md");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn finish_counts_changes() {
        let mut cursor = HunkCursor::new(parse_hunk_header("@@ -1,3 +1,3 @@").unwrap());
        for line in [" a", "-b", "+c", "+d", " e"] {
            cursor.push_line(line);
        }
        let mut builder = FileBuilder::new("lib.rs".into(), "lib.rs".into());
        builder.hunks.push(cursor.finish());

        let file = builder.finish();
        assert_eq!(file.additions, 2);
        assert_eq!(file.deletions, 1);
        assert_eq!(file.total_lines, 5);
        assert_eq!(file.change_type, ChangeType::Modify);
        assert_eq!(file.name, "lib.rs");
        assert_eq!(file.new_file_ext, "rs");
    }

    #[test]
    fn finish_clears_missing_side() {
        let mut builder = FileBuilder::new("old/gone.TXT".into(), "old/gone.TXT".into());
        builder.marker_type = Some(ChangeType::Delete);
        let file = builder.finish();

        assert_eq!(file.old_path, "old/gone.TXT");
        assert_eq!(file.new_path, "");
        assert_eq!(file.name, "gone.TXT");
        assert_eq!(file.old_file_ext, "txt");
        assert_eq!(file.new_file_ext, "");
        assert_eq!(file.effective_path(), "old/gone.TXT");
    }

    #[test]
    fn rename_keyword_wins_over_markers() {
        let mut builder = FileBuilder::new("a.rs".into(), "b.rs".into());
        builder.marker_type = Some(ChangeType::Modify);
        builder.mode_type = Some(ChangeType::Add);
        builder.keyword_type = Some(ChangeType::Rename);
        assert_eq!(builder.finish().change_type, ChangeType::Rename);
    }
}
