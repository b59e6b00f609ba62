// file: src/fetch/mod.rs
// description: source fetching module exports
// reference: internal module structure

pub mod client;
pub mod outcome;

pub use client::SourceFetcher;
pub use outcome::{FetchFailure, FetchOutcome};
