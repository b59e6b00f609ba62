// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod fetch;
pub mod models;
pub mod pipeline;
pub mod query;
pub mod utils;

pub use config::{Config, ExtractionConfig, HttpConfig, SearchConfig, SourcesConfig};
pub use error::{Result, ScrapeError};
pub use exporter::JsonExporter;
pub use extractor::{Extractor, ImageExtractor, VideoExtractor};
pub use fetch::{FetchFailure, FetchOutcome, SourceFetcher};
pub use models::{ImageUrl, SearchResult, SourceKind, Topic, VideoRef};
pub use pipeline::ContentAggregator;
pub use query::QueryBuilder;
pub use utils::{OperationTimer, Validator};
