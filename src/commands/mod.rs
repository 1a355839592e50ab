//! Command implementations for splitdiff.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Rendering lives in `render`.

mod render;


use crate::cli::{BranchArgs, BranchesArgs, Cli, Command, ParseArgs, SplitArgs};
use log::info;
use splitdiff::config::Config;
use splitdiff::diff::{self, ParsedFile};
use splitdiff::error::{Result, SplitdiffError};
use splitdiff::git;
use std::io::Read;
use std::path::Path;

/// Dispatch a command to its implementation.
///
/// Loads the config first so every command sees the same settings.
pub fn dispatch(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        SplitdiffError::UserError(format!("failed to read current directory: {}", e))
    })?;
    let config = Config::discover(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Command::Parse(args) => cmd_parse(&config, args),
        Command::Split(args) => cmd_split(&config, args),
        Command::Branch(args) => cmd_branch(&config, args),
        Command::Branches(args) => cmd_branches(args),
    }
}

fn cmd_parse(config: &Config, args: ParseArgs) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    let files = load_files(config, &text)?;
    let format = args.format.unwrap_or(config.output);
    println!("{}", render::render_files(&files, format)?);
    Ok(())
}

fn cmd_split(config: &Config, args: SplitArgs) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    let files = load_files(config, &text)?;
    println!(
        "{}",
        render::render_split_views(&files, args.file.as_deref(), args.pretty)?
    );
    Ok(())
}

fn cmd_branch(config: &Config, args: BranchArgs) -> Result<()> {
    let extra_args = config.diff_args()?;
    let text = git::branch_diff(
        &args.repo,
        &args.source,
        &args.target,
        config.context_lines,
        &extra_args,
    )?;
    let files = load_files(config, &text)?;

    let output = if args.split {
        render::render_split_views(&files, None, false)?
    } else {
        render::render_files(&files, args.format.unwrap_or(config.output))?
    };
    println!("{}", output);
    Ok(())
}

fn cmd_branches(args: BranchesArgs) -> Result<()> {
    if args.activity {
        for entry in git::branch_activity(&args.repo)? {
            println!(
                "{}\t{}\t{}\t{}",
                entry.branch, entry.date_iso, entry.date_relative, entry.committer_name
            );
        }
        return Ok(());
    }

    for branch in git::list_branches(&args.repo)? {
        let marker = if branch.is_current { "*" } else { " " };
        println!("{} {}", marker, branch.name);
    }
    Ok(())
}

/// Read diff text from a file, or from stdin when `input` is absent or `-`.
fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path).map_err(|e| {
            SplitdiffError::UserError(format!(
                "failed to read diff file '{}': {}",
                path.display(),
                e
            ))
        }),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| SplitdiffError::UserError(format!("failed to read stdin: {}", e)))?;
            Ok(text)
        }
    }
}

/// Parse diff text and drop files matching the config's `exclude_paths`.
fn load_files(config: &Config, text: &str) -> Result<Vec<ParsedFile>> {
    let files = diff::parse(text)?;
    let excludes = config.exclude_matcher()?;

    let total = files.len();
    let kept: Vec<ParsedFile> = files
        .into_iter()
        .filter(|file| !excludes.is_match(file.effective_path()))
        .collect();

    if kept.len() < total {
        info!(
            "excluded {} of {} file(s) matching exclude_paths",
            total - kept.len(),
            total
        );
    }
    Ok(kept)
}
