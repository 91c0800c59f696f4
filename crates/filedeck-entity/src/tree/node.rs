//! Tree node structures for hierarchical display.
//!
//! Nodes are view models: they are rebuilt from the current record list on
//! every relevant change and carry no identity across rebuilds other than
//! the folder `path` / file `key` strings.

use std::sync::Arc;

use crate::file::FileRecord;

/// Path separator used in storage keys.
pub const SEPARATOR: char = '/';

/// A node in the browsing tree.
#[derive(Debug, Clone)]
pub enum TreeNode {
    /// An inner folder.
    Folder(FolderNode),
    /// A file leaf.
    File(FileNode),
}

/// A folder derived from one key-prefix segment.
#[derive(Debug, Clone)]
pub struct FolderNode {
    /// Single path segment naming this folder.
    pub name: String,
    /// Joined segment prefix with a trailing separator
    /// (e.g. `uploads/photos/`). Identity key for expansion state.
    pub path: String,
    /// Child nodes, re-sorted on every rebuild.
    pub children: Vec<TreeNode>,
}

/// A file leaf.
#[derive(Debug, Clone)]
pub struct FileNode {
    /// Display name, taken from the record's `filename`.
    pub name: String,
    /// The originating record. The node never owns it; the same record may
    /// be shown, downloaded, or deleted elsewhere.
    pub record: Arc<FileRecord>,
}

impl TreeNode {
    /// Whether this node is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }
}

impl FolderNode {
    /// Number of file leaves in this subtree (the "N files" label).
    pub fn file_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                TreeNode::Folder(folder) => folder.file_count(),
                TreeNode::File(_) => 1,
            })
            .sum()
    }
}
