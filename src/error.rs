//! Error types for splitdiff.
//!
//! Uses thiserror for derive macros. The parser itself is permissive and only
//! reports [`ParseError`] for input it cannot make any sense of.

use crate::exit_codes;
use thiserror::Error;

/// Catastrophic diff input.
///
/// Line numbers are 1-based positions in the input text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `diff --git "...` header whose first quoted path never closes.
    #[error("line {line}: unterminated quoted path in diff header")]
    UnterminatedQuotedPath { line: usize },

    /// A `---` header line with no `+++` line after it.
    #[error("line {line}: '---' header is not followed by a '+++' line")]
    MissingNewPathLine { line: usize },
}

/// Main error type for splitdiff operations.
#[derive(Error, Debug)]
pub enum SplitdiffError {
    /// User provided invalid arguments or unreadable input.
    #[error("{0}")]
    UserError(String),

    /// The diff text could not be parsed.
    #[error("Failed to parse diff: {0}")]
    Parse(#[from] ParseError),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// Config file could not be read or is invalid.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl SplitdiffError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SplitdiffError::UserError(_) => exit_codes::USER_ERROR,
            SplitdiffError::Parse(_) => exit_codes::PARSE_FAILURE,
            SplitdiffError::GitError(_) => exit_codes::GIT_FAILURE,
            SplitdiffError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
        }
    }
}

/// Result type alias for splitdiff operations.
pub type Result<T> = std::result::Result<T, SplitdiffError>;
