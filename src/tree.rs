//! Recursive directory tree for the `/api/tree` endpoint.

use std::cmp::Ordering;
use std::io;
use std::path::Path;

use icu_collator::{Collator, CollatorOptions};
use serde::Serialize;

use crate::exclusion::ExclusionSet;
use crate::source::{DirectorySource, EntryKind};

/// Node in the tree response.
///
/// `path` is relative to the served root, uses `/` separators on every
/// platform, and is empty for the root itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    Folder {
        name: String,
        path: String,
        children: Vec<TreeNode>,
    },
    File {
        name: String,
        path: String,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::Folder { name, .. } | TreeNode::File { name, .. } => name,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            TreeNode::Folder { path, .. } | TreeNode::File { path, .. } => path,
        }
    }

    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::Folder { children, .. } => children,
            TreeNode::File { .. } => &[],
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, TreeNode::Folder { .. })
    }
}

/// Walks a directory through a [`DirectorySource`], skipping hidden and
/// excluded names at every level.
pub struct TreeBuilder<'a, S: DirectorySource + ?Sized> {
    source: &'a S,
    exclusions: &'a ExclusionSet,
}

impl<'a, S: DirectorySource + ?Sized> TreeBuilder<'a, S> {
    pub fn new(source: &'a S, exclusions: &'a ExclusionSet) -> Self {
        Self { source, exclusions }
    }

    /// Build the complete tree under `root`. Any listing failure anywhere in
    /// the walk fails the whole build.
    pub fn build(&self, root: &Path) -> io::Result<TreeNode> {
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(TreeNode::Folder {
            name,
            path: String::new(),
            children: self.build_children(root, "")?,
        })
    }

    fn build_children(&self, dir: &Path, relative: &str) -> io::Result<Vec<TreeNode>> {
        let mut nodes = Vec::new();

        for entry in self.source.list(dir)? {
            if entry.name.starts_with('.') || self.exclusions.contains(&entry.name) {
                continue;
            }

            let path = if relative.is_empty() {
                entry.name.clone()
            } else {
                format!("{}/{}", relative, entry.name)
            };

            let node = match entry.kind {
                EntryKind::Directory => {
                    let children = self.build_children(&dir.join(&entry.file_name), &path)?;
                    TreeNode::Folder {
                        name: entry.name,
                        path,
                        children,
                    }
                }
                EntryKind::File => TreeNode::File {
                    name: entry.name,
                    path,
                },
            };

            nodes.push(node);
        }

        nodes.sort_by(compare_nodes);
        Ok(nodes)
    }
}

thread_local! {
    // Root locale, default strength. Built once per blocking worker thread.
    static COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Folders before files, then by name.
fn compare_nodes(a: &TreeNode, b: &TreeNode) -> Ordering {
    match (a.is_folder(), b.is_folder()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => compare_names(a.name(), b.name()),
    }
}

/// Locale-aware name order. Collation ties fall back to code-point order so
/// sibling order never depends on listing order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        })
        .then_with(|| a.cmp(b))
}
