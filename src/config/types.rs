//! Configuration types and defaults for splitdiff.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = ".splitdiff.yaml";

/// Upper bound for `context_lines`.
pub(crate) const MAX_CONTEXT_LINES: u32 = 10_000;

/// How parsed diffs are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Compact JSON (default).
    #[default]
    Json,
    /// Indented JSON.
    Pretty,
    /// One line per file with change counts.
    Summary,
    /// Files grouped into folders.
    Tree,
}

pub(crate) fn default_context_lines() -> u32 {
    3
}
