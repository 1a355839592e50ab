//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for splitdiff.
///
/// This struct represents the contents of `.splitdiff.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Diff source settings
    // =========================================================================
    /// Lines of context passed to `git diff --unified`.
    #[serde(default = "default_context_lines")]
    pub context_lines: u32,

    /// Extra `git diff` arguments, split shell-style (e.g. `-M50% --no-ext-diff`).
    #[serde(default)]
    pub diff_args: String,

    // =========================================================================
    // Output settings
    // =========================================================================
    /// Glob patterns; files whose effective path matches are left out of output.
    #[serde(default)]
    pub exclude_paths: Vec<String>,

    /// Output format when `--format` is not given.
    #[serde(default)]
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            context_lines: default_context_lines(),
            diff_args: String::new(),
            exclude_paths: Vec::new(),
            output: OutputFormat::default(),
        }
    }
}
