//! Text and JSON rendering of parsed diffs.

use serde::Serialize;
use splitdiff::config::OutputFormat;
use splitdiff::diff::{ChangeType, ParsedFile};
use splitdiff::error::{Result, SplitdiffError};
use splitdiff::split_view::{SplitView, to_split_view};
use splitdiff::tree::{NodeKind, TreeNode, build_file_tree};
use std::fmt::Write;

/// A split view labelled with the file it belongs to.
#[derive(Debug, Serialize)]
struct FileSplitView<'a> {
    path: &'a str,
    #[serde(flatten)]
    view: SplitView,
}

/// Render parsed files in the requested format.
pub(super) fn render_files(files: &[ParsedFile], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(files, false),
        OutputFormat::Pretty => to_json(files, true),
        OutputFormat::Summary => Ok(render_summary(files)),
        OutputFormat::Tree => Ok(render_tree(&build_file_tree(files), files)),
    }
}

/// Render split views for every file, or only for the file at `only`.
pub(super) fn render_split_views(
    files: &[ParsedFile],
    only: Option<&str>,
    pretty: bool,
) -> Result<String> {
    let views: Vec<FileSplitView<'_>> = files
        .iter()
        .filter(|file| only.is_none_or(|path| file.effective_path() == path))
        .map(|file| FileSplitView {
            path: file.effective_path(),
            view: to_split_view(file),
        })
        .collect();

    match only {
        Some(path) => {
            let view = views.into_iter().next().ok_or_else(|| {
                SplitdiffError::UserError(format!("file '{}' is not part of the diff", path))
            })?;
            to_json(&view, pretty)
        }
        None => to_json(&views, pretty),
    }
}

/// One line per file followed by a totals line, in the style of `git diff --stat`.
pub(super) fn render_summary(files: &[ParsedFile]) -> String {
    let mut out = String::new();
    let mut additions = 0;
    let mut deletions = 0;

    for file in files {
        let path = match file.change_type {
            ChangeType::Rename | ChangeType::Copy => {
                format!("{} => {}", file.old_path, file.new_path)
            }
            _ => file.effective_path().to_string(),
        };
        let counts = if file.is_binary {
            "(binary)".to_string()
        } else {
            format!("+{} -{}", file.additions, file.deletions)
        };
        let _ = writeln!(out, "{:<8} {} {}", file.change_type.label(), path, counts);

        additions += file.additions;
        deletions += file.deletions;
    }

    let _ = write!(
        out,
        "{} file(s) changed, {} insertion(s)(+), {} deletion(s)(-)",
        files.len(),
        additions,
        deletions
    );
    out
}

/// Indented folder tree; files show their change label.
pub(super) fn render_tree(root: &TreeNode, files: &[ParsedFile]) -> String {
    let mut out = String::new();
    for child in &root.children {
        write_node(&mut out, child, files, 0);
    }
    out.trim_end().to_string()
}

fn write_node(out: &mut String, node: &TreeNode, files: &[ParsedFile], depth: usize) {
    let indent = "  ".repeat(depth);
    match node.kind {
        NodeKind::Folder => {
            let _ = writeln!(out, "{}{}/", indent, node.name);
            for child in &node.children {
                write_node(out, child, files, depth + 1);
            }
        }
        NodeKind::File => {
            let label = node
                .file_index
                .and_then(|idx| files.get(idx))
                .map_or("", |file| file.change_type.label());
            let _ = writeln!(out, "{}{} [{}]", indent, node.name, label);
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.map_err(|e| SplitdiffError::UserError(format!("failed to serialize output: {}", e)))
}
