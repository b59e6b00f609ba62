// file: src/fetch/outcome.rs
// description: success/failure classification of a single source request

use crate::error::{Result, ScrapeError};
use crate::models::SourceKind;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// No complete response within the configured timeout (milliseconds)
    Timeout(u64),
    Transport(String),
    HttpStatus(u16),
    TooLarge { size: usize, max: usize },
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::Timeout(ms) => write!(f, "timed out after {}ms", ms),
            FetchFailure::Transport(message) => write!(f, "transport error: {}", message),
            FetchFailure::HttpStatus(status) => write!(f, "HTTP status {}", status),
            FetchFailure::TooLarge { size, max } => {
                write!(f, "response too large: {} bytes (max: {} bytes)", size, max)
            }
        }
    }
}

/// Raw document body or the reason the request produced none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Success(String),
    Failure(FetchFailure),
}

impl FetchOutcome {
    pub fn into_result(self, kind: SourceKind) -> Result<String> {
        match self {
            FetchOutcome::Success(body) => Ok(body),
            FetchOutcome::Failure(FetchFailure::Timeout(timeout_ms)) => {
                Err(ScrapeError::Timeout { kind, timeout_ms })
            }
            FetchOutcome::Failure(FetchFailure::Transport(message)) => {
                Err(ScrapeError::Transport { kind, message })
            }
            FetchOutcome::Failure(FetchFailure::HttpStatus(status)) => {
                Err(ScrapeError::HttpStatus { kind, status })
            }
            FetchOutcome::Failure(FetchFailure::TooLarge { size, max }) => {
                Err(ScrapeError::ResponseTooLarge { kind, size, max })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_into_body() {
        let outcome = FetchOutcome::Success("<html></html>".to_string());
        assert_eq!(outcome.into_result(SourceKind::Image).unwrap(), "<html></html>");
    }

    #[test]
    fn test_status_failure_maps_to_typed_error() {
        let outcome = FetchOutcome::Failure(FetchFailure::HttpStatus(503));
        match outcome.into_result(SourceKind::Video) {
            Err(ScrapeError::HttpStatus { kind, status }) => {
                assert_eq!(kind, SourceKind::Video);
                assert_eq!(status, 503);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_timeout_failure_keeps_duration() {
        let outcome = FetchOutcome::Failure(FetchFailure::Timeout(10_000));
        let err = outcome.into_result(SourceKind::Image).unwrap_err();
        assert_eq!(err.to_string(), "image source timed out after 10000ms");
    }
}
