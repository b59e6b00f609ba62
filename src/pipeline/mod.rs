// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod aggregator;

pub use aggregator::ContentAggregator;
