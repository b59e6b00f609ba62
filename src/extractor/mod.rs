// file: src/extractor/mod.rs
// description: document extraction module exports and the extractor contract
// reference: internal module structure

pub mod image;
pub mod patterns;
pub mod video;

pub use image::ImageExtractor;
pub use video::VideoExtractor;

use crate::error::Result;
use crate::models::SourceKind;

/// Converts a raw document body into a bounded, ordered list of records.
///
/// Implementations must be pure: the same body and limit always yield the
/// same sequence. Markup that cannot be interpreted is reported as an error
/// rather than panicking; callers decide how to degrade.
pub trait Extractor: Send + Sync {
    type Item;

    fn kind(&self) -> SourceKind;

    fn extract(&self, body: &str, limit: usize) -> Result<Vec<Self::Item>>;
}
