// file: src/extractor/image.rs
// description: image url extraction from image search result markup
// reference: https://docs.rs/scraper

use crate::config::ExtractionConfig;
use crate::error::{Result, ScrapeError};
use crate::extractor::Extractor;
use crate::extractor::patterns::{MEDIA_URL, decode_escaped_url};
use crate::models::{ImageUrl, SourceKind};
use scraper::{Html, Selector};
use tracing::debug;

pub struct ImageExtractor {
    selector: Selector,
    metadata_attribute: String,
    disallowed_extensions: Vec<String>,
}

impl ImageExtractor {
    pub fn new(config: &ExtractionConfig) -> Result<Self> {
        let selector = Selector::parse(&config.image_selector).map_err(|e| ScrapeError::Parse {
            kind: SourceKind::Image,
            message: format!("Invalid CSS selector '{}': {:?}", config.image_selector, e),
        })?;

        Ok(Self {
            selector,
            metadata_attribute: config.metadata_attribute.clone(),
            disallowed_extensions: config.disallowed_extensions.clone(),
        })
    }
}

impl Extractor for ImageExtractor {
    type Item = ImageUrl;

    fn kind(&self) -> SourceKind {
        SourceKind::Image
    }

    fn extract(&self, body: &str, limit: usize) -> Result<Vec<ImageUrl>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let document = Html::parse_document(body);
        let mut images = Vec::new();
        let mut containers = 0usize;
        let mut matched = 0usize;

        for element in document.select(&self.selector) {
            containers += 1;

            let Some(metadata) = element.value().attr(&self.metadata_attribute) else {
                continue;
            };
            let Some(raw) = MEDIA_URL.captures(metadata).and_then(|c| c.get(1)) else {
                continue;
            };
            matched += 1;

            let decoded = decode_escaped_url(raw.as_str());
            match ImageUrl::parse(&decoded, &self.disallowed_extensions) {
                Some(url) => images.push(url),
                None => debug!("Skipping image candidate: {}", decoded),
            }

            if images.len() >= limit {
                break;
            }
        }

        if containers > 0 && matched == 0 {
            return Err(ScrapeError::Parse {
                kind: SourceKind::Image,
                message: format!(
                    "{} result containers found but none carried a media url",
                    containers
                ),
            });
        }

        debug!(
            "Extracted {} images from {} result containers",
            images.len(),
            containers
        );
        Ok(images)
    }
}
