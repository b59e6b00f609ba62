// file: src/models/topic.rs
// description: validated search subject
// reference: unit of search for both sources

use crate::error::{Result, ScrapeError};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const BLANK_TOPIC_MESSAGE: &str = "Please enter a valid topic.";

/// A non-empty, trimmed search subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Topic(String);

impl Topic {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ScrapeError::InvalidInput(BLANK_TOPIC_MESSAGE.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase ascii slug, used for export file names.
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.0.len());
        for ch in self.0.chars() {
            if ch.is_ascii_alphanumeric() {
                slug.push(ch.to_ascii_lowercase());
            } else if !slug.ends_with('-') && !slug.is_empty() {
                slug.push('-');
            }
        }
        let slug = slug.trim_end_matches('-').to_string();
        if slug.is_empty() { "topic".to_string() } else { slug }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
