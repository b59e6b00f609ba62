// file: src/config.rs
// description: application configuration management with toml and environment support
// reference: https://docs.rs/config

use crate::error::{Result, ScrapeError};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Identity and transport settings shared by both sources.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_max_response_bytes")]
    pub max_response_bytes: usize,
    #[serde(default = "default_pool_idle_timeout_secs")]
    pub pool_idle_timeout_secs: u64,
    #[serde(default = "default_pool_max_idle_per_host")]
    pub pool_max_idle_per_host: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourcesConfig {
    #[serde(default = "default_image_search_url")]
    pub image_search_url: String,
    /// Mode token biasing the image source toward high-resolution results
    #[serde(default = "default_image_form")]
    pub image_form: String,
    #[serde(default = "default_video_search_url")]
    pub video_search_url: String,
    /// Appended to the topic before the video query is encoded
    #[serde(default = "default_video_qualifier")]
    pub video_qualifier: String,
    #[serde(default = "default_watch_url_prefix")]
    pub watch_url_prefix: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractionConfig {
    #[serde(default = "default_image_selector")]
    pub image_selector: String,
    #[serde(default = "default_metadata_attribute")]
    pub metadata_attribute: String,
    #[serde(default = "default_disallowed_extensions")]
    pub disallowed_extensions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    #[serde(default = "default_image_limit")]
    pub image_limit: usize,
    #[serde(default = "default_video_limit")]
    pub video_limit: usize,
    #[serde(default = "default_pacing_delay_ms")]
    pub pacing_delay_ms: u64,
    #[serde(default)]
    pub concurrent_sources: bool,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_max_response_bytes() -> usize {
    8 * 1024 * 1024
}

fn default_pool_idle_timeout_secs() -> u64 {
    90
}

fn default_pool_max_idle_per_host() -> usize {
    2
}

fn default_image_search_url() -> String {
    "https://www.bing.com/images/search".to_string()
}

fn default_image_form() -> String {
    "HDRSC2".to_string()
}

fn default_video_search_url() -> String {
    "https://www.youtube.com/results".to_string()
}

fn default_video_qualifier() -> String {
    "educational".to_string()
}

fn default_watch_url_prefix() -> String {
    "https://www.youtube.com/watch?v=".to_string()
}

fn default_image_selector() -> String {
    "a.iusc".to_string()
}

fn default_metadata_attribute() -> String {
    "m".to_string()
}

fn default_disallowed_extensions() -> Vec<String> {
    vec![".webp".to_string()]
}

fn default_image_limit() -> usize {
    5
}

fn default_video_limit() -> usize {
    3
}

fn default_pacing_delay_ms() -> u64 {
    500
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
            max_response_bytes: default_max_response_bytes(),
            pool_idle_timeout_secs: default_pool_idle_timeout_secs(),
            pool_max_idle_per_host: default_pool_max_idle_per_host(),
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            image_search_url: default_image_search_url(),
            image_form: default_image_form(),
            video_search_url: default_video_search_url(),
            video_qualifier: default_video_qualifier(),
            watch_url_prefix: default_watch_url_prefix(),
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            image_selector: default_image_selector(),
            metadata_attribute: default_metadata_attribute(),
            disallowed_extensions: default_disallowed_extensions(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            image_limit: default_image_limit(),
            video_limit: default_video_limit(),
            pacing_delay_ms: default_pacing_delay_ms(),
            concurrent_sources: false,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new("config/default.toml")).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("CONTENT_FINDER")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| ScrapeError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| ScrapeError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(ScrapeError::Config("user_agent must not be empty".to_string()));
        }

        if self.http.timeout_ms == 0 {
            return Err(ScrapeError::Config("timeout_ms must be greater than 0".to_string()));
        }

        if self.http.max_response_bytes == 0 {
            return Err(ScrapeError::Config(
                "max_response_bytes must be greater than 0".to_string(),
            ));
        }

        for (name, endpoint) in [
            ("image_search_url", &self.sources.image_search_url),
            ("video_search_url", &self.sources.video_search_url),
            ("watch_url_prefix", &self.sources.watch_url_prefix),
        ] {
            url::Url::parse(endpoint)
                .map_err(|e| ScrapeError::Config(format!("{name} is not an absolute URL: {e}")))?;
        }

        Validator::validate_limit("image_limit", self.search.image_limit)
            .and_then(|_| Validator::validate_limit("video_limit", self.search.video_limit))
            .map_err(|e| ScrapeError::Config(e.to_string()))?;

        if self.extraction.image_selector.trim().is_empty() {
            return Err(ScrapeError::Config("image_selector must not be empty".to_string()));
        }

        Ok(())
    }
}
