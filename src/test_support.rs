use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Create a repository on `main` with a single committed README.md.
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    // Deterministic default branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "commit.gpgsign", "false"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    commit_all(path, "Initial commit");

    temp_dir
}

/// Stage everything and commit.
pub(crate) fn commit_all(repo_dir: &Path, message: &str) {
    git(repo_dir, &["add", "."]);
    git(repo_dir, &["commit", "-m", message]);
}

pub(crate) fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}
