// file: src/models/image.rs
// description: validated absolute image url

use crate::config::ExtractionConfig;
use crate::error::ScrapeError;
use crate::utils::Validator;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Accepts `candidate` only if it is an absolute http(s) URL that does not
    /// end in one of `disallowed_extensions`, either as a whole or by path.
    pub fn parse(candidate: &str, disallowed_extensions: &[String]) -> Option<Self> {
        Validator::validate_url(candidate).ok()?;
        let parsed = url::Url::parse(candidate).ok()?;

        let full = candidate.to_ascii_lowercase();
        let path = parsed.path().to_ascii_lowercase();
        if disallowed_extensions.iter().any(|ext| {
            let ext = ext.to_ascii_lowercase();
            full.ends_with(&ext) || path.ends_with(&ext)
        }) {
            return None;
        }

        Some(Self(candidate.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ImageUrl {
    type Error = ScrapeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let disallowed = ExtractionConfig::default().disallowed_extensions;
        Self::parse(&value, &disallowed)
            .ok_or_else(|| ScrapeError::InvalidInput(format!("not an accepted image url: {value}")))
    }
}

impl From<ImageUrl> for String {
    fn from(url: ImageUrl) -> Self {
        url.0
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
