// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use crate::models::SourceKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{kind} source transport failure: {message}")]
    Transport { kind: SourceKind, message: String },

    #[error("{kind} source timed out after {timeout_ms}ms")]
    Timeout { kind: SourceKind, timeout_ms: u64 },

    #[error("{kind} source returned HTTP status {status}")]
    HttpStatus { kind: SourceKind, status: u16 },

    #[error("{kind} source response too large: {size} bytes (max: {max} bytes)")]
    ResponseTooLarge {
        kind: SourceKind,
        size: usize,
        max: usize,
    },

    #[error("{kind} document parse error: {message}")]
    Parse { kind: SourceKind, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ScrapeError {
    fn from(err: serde_json::Error) -> Self {
        ScrapeError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ScrapeError::HttpStatus {
            kind: SourceKind::Image,
            status: 503,
        };
        assert_eq!(err.to_string(), "image source returned HTTP status 503");
    }

    #[test]
    fn test_parse_error_names_source() {
        let err = ScrapeError::Parse {
            kind: SourceKind::Video,
            message: "no entries".to_string(),
        };
        assert_eq!(err.to_string(), "video document parse error: no entries");
    }
}
