//! Folder/file tree derived from flat storage keys.

pub mod node;

pub use node::{FileNode, FolderNode, TreeNode, SEPARATOR};
