//! # filedeck-browser
//!
//! The browsing core: a pure tree builder that turns flat storage keys
//! into a folder/file hierarchy, and the [`FileBrowser`] controller that
//! owns the view state and mediates between the remote store and the
//! builder.

pub mod state;
pub mod tree;

pub use state::{FileBrowser, LoadPhase};
pub use tree::build_tree;
