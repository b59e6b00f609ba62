// file: src/models/video.rs
// description: video reference extracted from the video source

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRef {
    /// Source-assigned identifier, unique within one result list
    pub id: String,
    pub title: String,
    /// Watch link built from the id
    pub url: String,
}

impl VideoRef {
    pub fn new(id: String, title: String, watch_url_prefix: &str) -> Self {
        let url = format!("{}{}", watch_url_prefix, id);
        Self { id, title, url }
    }
}
