//! # filedeck-entity
//!
//! Shared type definitions for FileDeck. Every struct in this crate mirrors
//! a payload of the remote file-storage API or a value derived from one.
//! All types derive `Debug`, `Clone`, `Serialize`, and `Deserialize`; field
//! names are the JSON wire contract.

pub mod api;
pub mod file;
pub mod size;
pub mod stats;
pub mod tree;

pub use file::{FileCategory, FileDetailKind, FileMetadataDetail, FileRecord, FileUploadResponse};
pub use stats::UploadStats;
pub use tree::{FileNode, FolderNode, TreeNode};
