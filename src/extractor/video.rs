// file: src/extractor/video.rs
// description: video reference extraction from inline result json in the video search page
// reference: https://docs.rs/regex

use crate::error::{Result, ScrapeError};
use crate::extractor::Extractor;
use crate::extractor::patterns::{VIDEO_ENTRY, VIDEO_ID_MARKER, decode_json_text};
use crate::models::{SourceKind, VideoRef};
use std::collections::HashSet;
use tracing::debug;

pub struct VideoExtractor {
    watch_url_prefix: String,
}

impl VideoExtractor {
    pub fn new(watch_url_prefix: impl Into<String>) -> Self {
        Self {
            watch_url_prefix: watch_url_prefix.into(),
        }
    }
}

impl Extractor for VideoExtractor {
    type Item = VideoRef;

    fn kind(&self) -> SourceKind {
        SourceKind::Video
    }

    fn extract(&self, body: &str, limit: usize) -> Result<Vec<VideoRef>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let mut videos = Vec::new();
        let mut seen = HashSet::new();
        let mut matches = 0usize;

        for capture in VIDEO_ENTRY.captures_iter(body) {
            matches += 1;
            let id = &capture[1];

            // first occurrence wins; repeats do not count toward the limit
            if !seen.insert(id.to_string()) {
                continue;
            }

            let title = decode_json_text(&capture[2]);
            videos.push(VideoRef::new(id.to_string(), title, &self.watch_url_prefix));

            if videos.len() >= limit {
                break;
            }
        }

        if matches == 0 && body.contains(VIDEO_ID_MARKER) {
            return Err(ScrapeError::Parse {
                kind: SourceKind::Video,
                message: "video ids present but no id/title pair matched".to_string(),
            });
        }

        debug!("Extracted {} unique videos from {} matches", videos.len(), matches);
        Ok(videos)
    }
}
