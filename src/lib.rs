//! Splitdiff: a unified-diff parser with side-by-side line alignment.
//!
//! - [`diff::parse`] turns `git diff` text into per-file records
//! - [`split_view::to_split_view`] aligns a file's changes into two columns
//! - [`tree::build_file_tree`] groups files into folders
//! - [`git`] fetches diff text from a repository

pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod git;
pub mod split_view;
pub mod tree;

#[cfg(test)]
pub(crate) mod test_support;
