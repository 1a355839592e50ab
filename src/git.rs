//! Git command runner: the source of diff text.
//!
//! Provides a wrapper around git commands with captured stdout/stderr
//! and structured error handling. The parser never calls git itself; the
//! CLI fetches text here and hands it to [`crate::diff::parse`].

use crate::error::{Result, SplitdiffError};
use log::{debug, info};
use std::path::Path;
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output, untouched (diff text is whitespace-sensitive).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    /// Create a new GitOutput from raw output bytes.
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns true if stdout is empty or whitespace.
    pub fn is_empty(&self) -> bool {
        self.stdout.trim().is_empty()
    }

    /// Returns non-blank stdout lines, trimmed.
    pub fn lines(&self) -> Vec<&str> {
        self.stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }
}

/// A local branch as listed by `git branch -l`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    pub is_remote: bool,
    pub is_current: bool,
}

/// A recently committed ref as reported by `git for-each-ref`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchActivity {
    /// Short ref name with any `origin/` prefix removed.
    pub branch: String,
    pub date_iso: String,
    pub date_relative: String,
    pub committer_name: String,
}

/// Number of refs reported by [`branch_activity`].
pub const BRANCH_ACTIVITY_COUNT: usize = 10;

const BRANCH_ACTIVITY_FORMAT: &str = concat!(
    "--format=%(refname:short)|%(committerdate:iso)",
    "|%(committerdate:relative)|%(committername)"
);

/// Run a git command with the specified working directory.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(SplitdiffError::GitError)` - On spawn failure or non-zero exit code
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();
    debug!("running git {} in {}", args.join(" "), cwd.display());

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            SplitdiffError::GitError(format!(
                "failed to execute git {}: {} (is git installed?)",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.trim().to_string()
        } else {
            git_output.stderr.clone()
        };

        Err(SplitdiffError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Get the diff between the merge base of `source` and `target`, and `target`.
///
/// Runs `git diff <source>...<target> --unified=<context_lines> [extra_args]`.
///
/// # Arguments
///
/// * `cwd` - A directory inside the repository
/// * `source` - Base revision (branch, tag or SHA)
/// * `target` - Revision whose changes are shown
/// * `context_lines` - Lines of context around each change
/// * `extra_args` - Additional `git diff` arguments
pub fn branch_diff<P: AsRef<Path>>(
    cwd: P,
    source: &str,
    target: &str,
    context_lines: u32,
    extra_args: &[String],
) -> Result<String> {
    let range = format!("{}...{}", source, target);
    let unified = format!("--unified={}", context_lines);

    let mut args: Vec<&str> = vec!["diff", &range, &unified];
    args.extend(extra_args.iter().map(String::as_str));

    let output = run_git(&cwd, &args)?;
    info!(
        "git diff {} produced {} bytes",
        range,
        output.stdout.len()
    );
    Ok(output.stdout)
}

/// List local branches with `git branch -l`.
pub fn list_branches<P: AsRef<Path>>(cwd: P) -> Result<Vec<Branch>> {
    let output = run_git(cwd, &["branch", "-l"])?;
    Ok(output.lines().into_iter().map(parse_branch_line).collect())
}

/// List the most recently committed refs, newest first.
///
/// Runs `git for-each-ref --count=10 --sort=-committerdate refs/`. The bare
/// `origin` entry (the remote HEAD symref) is skipped.
pub fn branch_activity<P: AsRef<Path>>(cwd: P) -> Result<Vec<BranchActivity>> {
    let count = format!("--count={}", BRANCH_ACTIVITY_COUNT);
    let output = run_git(
        cwd,
        &[
            "for-each-ref",
            &count,
            "--sort=-committerdate",
            "refs/",
            BRANCH_ACTIVITY_FORMAT,
        ],
    )?;
    Ok(output
        .lines()
        .into_iter()
        .filter_map(parse_activity_line)
        .collect())
}

fn parse_activity_line(line: &str) -> Option<BranchActivity> {
    let mut fields = line.split('|').map(str::to_string);
    let mut next = || fields.next().unwrap_or_default();

    let ref_name = next();
    let branch = ref_name
        .strip_prefix("origin/")
        .unwrap_or(&ref_name)
        .to_string();
    if branch.is_empty() || branch == "origin" {
        return None;
    }

    Some(BranchActivity {
        branch,
        date_iso: next(),
        date_relative: next(),
        committer_name: next(),
    })
}

fn parse_branch_line(line: &str) -> Branch {
    let is_current = line.starts_with('*');
    let name = line
        .strip_prefix('*')
        .or_else(|| line.strip_prefix('+'))
        .unwrap_or(line)
        .trim_start();
    let is_remote = name.contains("remotes/");

    Branch {
        name: name.strip_prefix("remotes/").unwrap_or(name).to_string(),
        is_remote,
        is_current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{commit_all, create_test_repo, git};
    use tempfile::TempDir;

    #[test]
    fn test_run_git_success() {
        let temp_dir = create_test_repo();
        let result = run_git(temp_dir.path(), &["status", "--porcelain"]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_run_git_failure_returns_git_error() {
        let temp_dir = create_test_repo();
        let result = run_git(temp_dir.path(), &["checkout", "nonexistent-branch"]);
        let err = result.unwrap_err();
        assert!(matches!(err, SplitdiffError::GitError(_)));
    }

    #[test]
    fn test_run_git_outside_repo_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = run_git(temp_dir.path(), &["rev-parse", "--show-toplevel"]);
        assert!(matches!(result, Err(SplitdiffError::GitError(_))));
    }

    #[test]
    fn test_branch_diff_parses() {
        let temp_dir = create_test_repo();
        let path = temp_dir.path();

        git(path, &["checkout", "-b", "feature"]);
        std::fs::write(path.join("README.md"), "# Test\nMore docs\n").unwrap();
        std::fs::write(path.join("new.rs"), "pub fn hello() {}\n").unwrap();
        commit_all(path, "Add changes");

        let text = branch_diff(path, "main", "feature", 3, &[]).unwrap();
        let files = crate::diff::parse(&text).unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].new_path, "new.rs");
        assert_eq!(files[0].change_type, crate::diff::ChangeType::Add);
        assert_eq!(files[0].additions, 1);
        assert_eq!(files[1].new_path, "README.md");
        assert_eq!(files[1].additions, 1);
        assert_eq!(files[1].deletions, 0);
    }

    #[test]
    fn test_branch_diff_bad_revision() {
        let temp_dir = create_test_repo();
        let result = branch_diff(temp_dir.path(), "main", "no-such-branch", 3, &[]);
        assert!(matches!(result, Err(SplitdiffError::GitError(_))));
    }

    #[test]
    fn test_list_branches() {
        let temp_dir = create_test_repo();
        git(temp_dir.path(), &["branch", "feature"]);

        let branches = list_branches(temp_dir.path()).unwrap();

        assert_eq!(branches.len(), 2);
        assert!(branches.iter().any(|b| b.name == "main" && b.is_current));
        assert!(branches.iter().any(|b| b.name == "feature" && !b.is_current));
    }

    #[test]
    fn test_branch_activity_lists_recent_refs() {
        let temp_dir = create_test_repo();
        let path = temp_dir.path();

        git(path, &["checkout", "-b", "feature"]);
        std::fs::write(path.join("new.rs"), "pub fn hello() {}\n").unwrap();
        git(path, &["add", "."]);
        git(
            path,
            &["-c", "user.name=Feature Author", "commit", "-m", "Add feature"],
        );

        let activity = branch_activity(path).unwrap();

        assert_eq!(activity.len(), 2);
        let feature = activity.iter().find(|a| a.branch == "feature").unwrap();
        assert_eq!(feature.committer_name, "Feature Author");
        assert!(!feature.date_iso.is_empty());
        assert!(!feature.date_relative.is_empty());
        let main = activity.iter().find(|a| a.branch == "main").unwrap();
        assert_eq!(main.committer_name, "Test User");
    }

    #[test]
    fn test_parse_activity_line() {
        assert_eq!(
            parse_activity_line("origin/dev|2024-05-01 10:00:00 +0200|3 days ago|Jane Doe"),
            Some(BranchActivity {
                branch: "dev".into(),
                date_iso: "2024-05-01 10:00:00 +0200".into(),
                date_relative: "3 days ago".into(),
                committer_name: "Jane Doe".into(),
            })
        );
        assert_eq!(parse_activity_line("origin|2024-05-01|now|Bot"), None);
        assert_eq!(parse_activity_line("main").unwrap().committer_name, "");
    }

    #[test]
    fn test_parse_branch_line() {
        assert_eq!(
            parse_branch_line("* main"),
            Branch {
                name: "main".into(),
                is_remote: false,
                is_current: true,
            }
        );
        assert_eq!(
            parse_branch_line("remotes/origin/dev"),
            Branch {
                name: "origin/dev".into(),
                is_remote: true,
                is_current: false,
            }
        );
        assert_eq!(parse_branch_line("+ worktree-branch").name, "worktree-branch");
    }

    #[test]
    fn test_git_output_lines() {
        let output = GitOutput {
            stdout: "  line1\n\nline2  \n".to_string(),
            stderr: String::new(),
        };
        assert_eq!(output.lines(), vec!["line1", "line2"]);
        assert!(!output.is_empty());

        let empty = GitOutput {
            stdout: "\n".to_string(),
            stderr: String::new(),
        };
        assert!(empty.is_empty());
        assert!(empty.lines().is_empty());
    }
}
