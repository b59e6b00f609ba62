// file: src/models/search_result.rs
// description: combined image and video result of one search
// reference: returned to the caller by the aggregator

use crate::models::{ImageUrl, VideoRef};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Image URLs in source document order
    pub images: Vec<ImageUrl>,

    /// Videos in first-seen order, unique by id
    pub videos: Vec<VideoRef>,
}

impl SearchResult {
    pub fn new(images: Vec<ImageUrl>, videos: Vec<VideoRef>) -> Self {
        Self { images, videos }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.videos.is_empty()
    }

    pub fn total_items(&self) -> usize {
        self.images.len() + self.videos.len()
    }

    pub fn into_parts(self) -> (Vec<ImageUrl>, Vec<VideoRef>) {
        (self.images, self.videos)
    }
}
