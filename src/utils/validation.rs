// file: src/utils/validation.rs
// description: input validation utilities and helpers
// reference: input validation patterns

use crate::error::{Result, ScrapeError};

/// Upper bound accepted for per-source result limits.
pub const MAX_RESULT_LIMIT: usize = 50;

pub struct Validator;

impl Validator {
    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ScrapeError::InvalidInput(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn validate_limit(name: &str, limit: usize) -> Result<()> {
        if limit == 0 {
            return Err(ScrapeError::InvalidInput(format!(
                "{} must be greater than 0",
                name
            )));
        }

        if limit > MAX_RESULT_LIMIT {
            return Err(ScrapeError::InvalidInput(format!(
                "{} too large (max {})",
                name, MAX_RESULT_LIMIT
            )));
        }

        Ok(())
    }

    /// Truncates to at most `max_chars` characters, never splitting a code point.
    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            None => text.to_string(),
            Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        }
    }
}
