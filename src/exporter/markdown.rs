// file: src/exporter/markdown.rs
// description: terminal rendering of search results

use crate::models::{ImageUrl, VideoRef};
use crate::utils::Validator;

pub const NO_VIDEOS_MESSAGE: &str = "No videos found.";
pub const NO_IMAGES_MESSAGE: &str = "No images found.";

const MAX_TITLE_CHARS: usize = 120;

/// Numbered markdown links, one per line.
pub fn render_videos(videos: &[VideoRef]) -> String {
    if videos.is_empty() {
        return NO_VIDEOS_MESSAGE.to_string();
    }

    videos
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let title = Validator::truncate_text(&v.title, MAX_TITLE_CHARS);
            format!("{}. [{}]({})", i + 1, title, v.url)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_images(images: &[ImageUrl]) -> String {
    if images.is_empty() {
        return NO_IMAGES_MESSAGE.to_string();
    }

    images
        .iter()
        .map(|url| format!("- {}", url))
        .collect::<Vec<_>>()
        .join("\n")
}
