// file: src/fetch/client.rs
// description: single-request http fetcher with browser identity and timeout
// reference: https://docs.rs/reqwest

use crate::config::HttpConfig;
use crate::error::{Result, ScrapeError};
use crate::fetch::outcome::{FetchFailure, FetchOutcome};
use crate::models::SourceKind;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

/// Reusable client shared by both sources. Cloning shares the connection pool.
#[derive(Debug, Clone)]
pub struct SourceFetcher {
    client: Client,
    config: HttpConfig,
}

impl SourceFetcher {
    pub fn new(config: HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_millis(config.timeout_ms))
            .pool_idle_timeout(Duration::from_secs(config.pool_idle_timeout_secs))
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .build()
            .map_err(|e| ScrapeError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Issues exactly one GET. Never retries and never returns an error;
    /// every failure is classified into the outcome and logged.
    pub async fn fetch(&self, url: &str, kind: SourceKind) -> FetchOutcome {
        debug!("Fetching {} source: {}", kind, url);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => return self.transport_failure(kind, e),
        };

        let status = response.status();
        if status != StatusCode::OK {
            warn!("{} request failed: {}", kind, status.as_u16());
            return FetchOutcome::Failure(FetchFailure::HttpStatus(status.as_u16()));
        }

        let max = self.config.max_response_bytes;
        if let Some(len) = response.content_length()
            && len as usize > max
        {
            warn!("{} response too large: {} bytes (max: {})", kind, len, max);
            return FetchOutcome::Failure(FetchFailure::TooLarge {
                size: len as usize,
                max,
            });
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return self.transport_failure(kind, e),
        };

        if body.len() > max {
            warn!("{} response too large: {} bytes (max: {})", kind, body.len(), max);
            return FetchOutcome::Failure(FetchFailure::TooLarge {
                size: body.len(),
                max,
            });
        }

        debug!("{} source returned {} bytes", kind, body.len());
        FetchOutcome::Success(body)
    }

    fn transport_failure(&self, kind: SourceKind, err: reqwest::Error) -> FetchOutcome {
        if err.is_timeout() {
            warn!("{} request timed out after {}ms", kind, self.config.timeout_ms);
            FetchOutcome::Failure(FetchFailure::Timeout(self.config.timeout_ms))
        } else {
            warn!("{} request failed: {}", kind, err);
            FetchOutcome::Failure(FetchFailure::Transport(err.to_string()))
        }
    }
}
