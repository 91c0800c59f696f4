//! File record types.

pub mod category;
pub mod detail;
pub mod model;
pub mod upload;

pub use category::FileCategory;
pub use detail::{FileDetailKind, FileMetadataDetail};
pub use model::FileRecord;
pub use upload::{FileUploadResponse, UploadRequest};
