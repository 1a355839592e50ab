//! CLI argument parsing for splitdiff.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use splitdiff::config::OutputFormat;
use std::path::PathBuf;

/// Splitdiff: parse unified diffs into structured per-file data.
///
/// Reads `git diff` output and prints files, hunks and line changes as JSON,
/// a summary, a folder tree, or side-by-side aligned columns.
#[derive(Parser, Debug)]
#[command(name = "splitdiff")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./.splitdiff.yaml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for splitdiff.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a diff and print the parsed files.
    Parse(ParseArgs),

    /// Parse a diff and print side-by-side split views as JSON.
    Split(SplitArgs),

    /// Diff two revisions with git and print the result.
    ///
    /// Runs `git diff SOURCE...TARGET` so only changes made on TARGET since
    /// the merge base are shown.
    Branch(BranchArgs),

    /// List local branches of a repository.
    ///
    /// With `--activity`, list the most recently committed refs instead,
    /// with commit date and committer.
    Branches(BranchesArgs),
}

/// Arguments for the `parse` command.
#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// Diff file to read; stdin when omitted or "-".
    pub input: Option<PathBuf>,

    /// Output format (overrides config `output`).
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `split` command.
#[derive(Parser, Debug)]
pub struct SplitArgs {
    /// Diff file to read; stdin when omitted or "-".
    pub input: Option<PathBuf>,

    /// Only project the file with this effective path.
    #[arg(long)]
    pub file: Option<String>,

    /// Indent the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the `branch` command.
#[derive(Parser, Debug)]
pub struct BranchArgs {
    /// Base revision.
    pub source: String,

    /// Revision whose changes are shown.
    pub target: String,

    /// Repository directory.
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Output format (overrides config `output`).
    #[arg(short, long, value_enum, conflicts_with = "split")]
    pub format: Option<OutputFormat>,

    /// Print split views instead of parsed files.
    #[arg(long)]
    pub split: bool,
}

/// Arguments for the `branches` command.
#[derive(Parser, Debug)]
pub struct BranchesArgs {
    /// Repository directory.
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Show recent commit activity across refs.
    #[arg(long)]
    pub activity: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_to_stdin() {
        let cli = Cli::try_parse_from(["splitdiff", "parse"]).unwrap();
        match cli.command {
            Command::Parse(args) => {
                assert!(args.input.is_none());
                assert!(args.format.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["splitdiff", "parse", "x.diff", "-vv", "--format", "summary"])
                .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Parse(args) => {
                assert_eq!(args.input, Some(PathBuf::from("x.diff")));
                assert_eq!(args.format, Some(OutputFormat::Summary));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn branch_requires_two_revisions() {
        assert!(Cli::try_parse_from(["splitdiff", "branch", "main"]).is_err());
        let cli = Cli::try_parse_from(["splitdiff", "branch", "main", "feature", "--split"])
            .unwrap();
        match cli.command {
            Command::Branch(args) => {
                assert_eq!(args.source, "main");
                assert_eq!(args.target, "feature");
                assert!(args.split);
                assert_eq!(args.repo, PathBuf::from("."));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn branches_activity_flag() {
        let cli = Cli::try_parse_from(["splitdiff", "branches", "--activity"]).unwrap();
        match cli.command {
            Command::Branches(args) => {
                assert!(args.activity);
                assert_eq!(args.repo, PathBuf::from("."));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn branch_split_conflicts_with_format() {
        let result =
            Cli::try_parse_from(["splitdiff", "branch", "a", "b", "--split", "--format", "tree"]);
        assert!(result.is_err());
    }
}
