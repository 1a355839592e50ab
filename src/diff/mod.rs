//! Unified diff parsing.
//!
//! Converts `git diff` output into one [`ParsedFile`] per touched file:
//! - file identity and change type (add, delete, modify, rename, copy)
//! - hunks with per-line changes and running old/new line numbers
//! - derived statistics (additions, deletions, extensions, display name)
//!
//! Handles renames and copies, mode changes, binary files, quoted paths,
//! paths with spaces, and missing trailing newlines.

mod header;
mod hunk;
mod model;
mod parser;
mod paths;
mod sort;
mod stats;


// Re-export public API
pub use model::{Change, ChangeType, Hunk, ParsedFile};
pub use parser::parse;
pub use sort::{locale_cmp, sort_files};
