//! Path extraction from `diff --git` header lines.

/// Old and new paths named by a `diff --git` line, prefixes stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct PathPair {
    pub old_path: String,
    pub new_path: String,
}

/// Parse the paths from a `diff --git` line.
///
/// Handles the forms git emits:
/// - `diff --git a/src/lib.rs b/src/lib.rs` (unquoted)
/// - `diff --git a/my file.rs b/my file.rs` (unquoted, embedded spaces)
/// - `diff --git "a/tab\there" "b/tab\there"` (both quoted)
/// - `diff --git "a/tab\there" b/plain` (old quoted only)
/// - `diff --git a/plain "b/tab\there"` (new quoted only)
///
/// Escapes inside quoted paths are kept as-is. An escaped quote (`\"`) ends
/// the quoted path early, so such names come back truncated. Returns `None`
/// only when the leading quoted path is never closed.
pub(super) fn parse_diff_git_line(line: &str) -> Option<PathPair> {
    let files = line.get(DIFF_GIT_PREFIX.len()..).unwrap_or("");

    let (old_path, new_path) = match files.find('"') {
        None => match symmetric_path(files) {
            Some(path) => (path, path),
            None => {
                let space = files.find(' ').unwrap_or(files.len());
                (slice(files, 2, space), slice_from(files, space + 3))
            }
        },
        Some(0) => {
            let close = find_from(files, '"', 2)?;
            let old_path = slice(files, 3, close);
            let new_path = match find_from(files, '"', close + 1) {
                // `"a/x" b/y`: the new path follows unquoted after `" b/`.
                None => slice_from(files, close + 4),
                Some(open) => {
                    let quoted = slice_from(files, open + 3);
                    quoted.strip_suffix('"').unwrap_or(quoted)
                }
            };
            (old_path, new_path)
        }
        Some(_) => {
            let space = files.find(' ').unwrap_or(files.len());
            let tail = slice_from(files, space + 1);
            let tail = tail.strip_prefix('"').unwrap_or(tail);
            let tail = tail.strip_suffix('"').unwrap_or(tail);
            (slice(files, 2, space), slice_from(tail, 2))
        }
    };

    Some(PathPair {
        old_path: old_path.to_string(),
        new_path: new_path.to_string(),
    })
}

/// Fixed prefix of a file header line.
pub(super) const DIFF_GIT_PREFIX: &str = "diff --git ";

/// `a/P b/P` with identical halves yields `P`, which may contain spaces.
fn symmetric_path(files: &str) -> Option<&str> {
    if files.len() % 2 == 0 {
        return None;
    }
    let mid = files.len() / 2;
    if files.as_bytes()[mid] != b' ' {
        return None;
    }
    let old = files[..mid].strip_prefix("a/")?;
    let new = files[mid + 1..].strip_prefix("b/")?;
    (old == new).then_some(old)
}

fn find_from(s: &str, needle: char, from: usize) -> Option<usize> {
    s.get(from..)?.find(needle).map(|idx| idx + from)
}

fn slice(s: &str, start: usize, end: usize) -> &str {
    s.get(start..end).unwrap_or("")
}

fn slice_from(s: &str, start: usize) -> &str {
    s.get(start..).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(line: &str) -> (String, String) {
        let pair = parse_diff_git_line(line).unwrap();
        (pair.old_path, pair.new_path)
    }

    #[test]
    fn unquoted_paths() {
        assert_eq!(
            paths("diff --git a/src/lib.rs b/src/lib.rs"),
            ("src/lib.rs".to_string(), "src/lib.rs".to_string())
        );
    }

    #[test]
    fn unquoted_rename_splits_at_first_space() {
        assert_eq!(
            paths("diff --git a/old.rs b/new.rs"),
            ("old.rs".to_string(), "new.rs".to_string())
        );
    }

    #[test]
    fn unquoted_paths_with_spaces() {
        assert_eq!(
            paths("diff --git a/src/my file.rs b/src/my file.rs"),
            ("src/my file.rs".to_string(), "src/my file.rs".to_string())
        );
    }

    #[test]
    fn both_paths_quoted() {
        assert_eq!(
            paths(r#"diff --git "a/dir/tab\there.txt" "b/dir/tab\there.txt""#),
            (r"dir/tab\there.txt".to_string(), r"dir/tab\there.txt".to_string())
        );
    }

    #[test]
    fn only_old_path_quoted() {
        assert_eq!(
            paths(r#"diff --git "a/caf\303\251.txt" b/cafe.txt"#),
            (r"caf\303\251.txt".to_string(), "cafe.txt".to_string())
        );
    }

    #[test]
    fn only_new_path_quoted() {
        assert_eq!(
            paths(r#"diff --git a/cafe.txt "b/caf\303\251.txt""#),
            ("cafe.txt".to_string(), r"caf\303\251.txt".to_string())
        );
    }

    #[test]
    fn escaped_quote_truncates_old_path() {
        let (old, new) = paths(r#"diff --git "a/odd\"name" b/plain"#);
        assert_eq!(old, "odd\\");
        assert_eq!(new, "/plain");
    }

    #[test]
    fn unterminated_quote_is_rejected() {
        assert_eq!(parse_diff_git_line(r#"diff --git "a/never closed"#), None);
    }

    #[test]
    fn truncated_line_does_not_panic() {
        assert_eq!(
            paths("diff --git "),
            (String::new(), String::new())
        );
        assert_eq!(paths("diff --git a/é"), ("é".to_string(), String::new()));
    }
}
