//! Folder tree of the files touched by a diff.

use crate::diff::ParsedFile;
use serde::Serialize;

/// Whether a tree node is a folder or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    File,
}

/// A node in the file tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    /// Last path segment (empty for the root).
    pub name: String,
    /// Full path from the root, `/`-separated.
    pub path: String,
    pub kind: NodeKind,
    pub children: Vec<TreeNode>,
    /// Index of the file in the slice the tree was built from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_index: Option<usize>,
}

impl TreeNode {
    fn folder(name: &str, path: String) -> Self {
        Self {
            name: name.to_string(),
            path,
            kind: NodeKind::Folder,
            children: Vec::new(),
            file_index: None,
        }
    }

    fn child_folder_mut(&mut self, name: &str, path: &str) -> &mut TreeNode {
        let idx = match self
            .children
            .iter()
            .position(|child| child.kind == NodeKind::Folder && child.name == name)
        {
            Some(idx) => idx,
            None => {
                self.children.push(TreeNode::folder(name, path.to_string()));
                self.children.len() - 1
            }
        };
        &mut self.children[idx]
    }
}

/// Group files into nested folders by effective path.
///
/// Folders and files appear in first-seen order. Files with an empty
/// effective path are skipped.
pub fn build_file_tree(files: &[ParsedFile]) -> TreeNode {
    let mut root = TreeNode::folder("", String::new());

    for (index, file) in files.iter().enumerate() {
        let path = file.effective_path();
        if path.is_empty() {
            continue;
        }

        let mut current = &mut root;
        let mut offset = 0;
        let segments: Vec<&str> = path.split('/').collect();
        for segment in &segments[..segments.len() - 1] {
            offset += segment.len();
            current = current.child_folder_mut(segment, &path[..offset]);
            offset += 1;
        }

        current.children.push(TreeNode {
            name: file.name.clone(),
            path: path.to_string(),
            kind: NodeKind::File,
            children: Vec::new(),
            file_index: Some(index),
        });
    }

    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::parse;

    const DIFF: &str = r#"diff --git a/src/diff/parser.rs b/src/diff/parser.rs
--- a/src/diff/parser.rs
+++ b/src/diff/parser.rs
diff --git a/README.md b/README.md
--- a/README.md
+++ b/README.md
diff --git a/src/lib.rs b/src/lib.rs
--- a/src/lib.rs
+++ b/src/lib.rs
diff --git a/src/diff/gone.rs b/src/diff/gone.rs
deleted file mode 100644
--- a/src/diff/gone.rs
+++ /dev/null
"#;

    #[test]
    fn builds_nested_folders() {
        let files = parse(DIFF).unwrap();
        let root = build_file_tree(&files);

        // Sorted input: README.md, src/diff/gone.rs, src/diff/parser.rs, src/lib.rs
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].name, "README.md");
        assert_eq!(root.children[0].kind, NodeKind::File);
        assert_eq!(root.children[0].file_index, Some(0));

        let src = &root.children[1];
        assert_eq!(src.kind, NodeKind::Folder);
        assert_eq!(src.path, "src");
        assert_eq!(src.children.len(), 2);

        let diff = &src.children[0];
        assert_eq!(diff.path, "src/diff");
        let names: Vec<&str> = diff.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["gone.rs", "parser.rs"]);
        assert_eq!(diff.children[0].path, "src/diff/gone.rs");

        assert_eq!(src.children[1].name, "lib.rs");
        assert_eq!(src.children[1].file_index, Some(3));
    }

    #[test]
    fn skips_pathless_files() {
        let mut files = parse(DIFF).unwrap();
        files[0].new_path.clear();
        let root = build_file_tree(&files);
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].name, "src");
    }

    #[test]
    fn empty_input_gives_empty_root() {
        let root = build_file_tree(&[]);
        assert_eq!(root.kind, NodeKind::Folder);
        assert!(root.children.is_empty());
    }
}
