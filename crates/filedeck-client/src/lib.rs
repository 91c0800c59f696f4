//! # filedeck-client
//!
//! Thin typed client for the remote file-storage API. The [`FileStore`]
//! trait is the seam the browser core consumes; [`HttpFileStore`] is the
//! HTTP implementation. Upload validation runs client-side before any
//! request leaves the process.

pub mod http;
pub mod store;
pub mod validate;

pub use http::HttpFileStore;
pub use store::FileStore;
