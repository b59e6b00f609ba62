// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod image;
pub mod search_result;
pub mod source;
pub mod topic;
pub mod video;

pub use image::ImageUrl;
pub use search_result::SearchResult;
pub use source::SourceKind;
pub use topic::Topic;
pub use video::VideoRef;
