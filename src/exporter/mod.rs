// file: src/exporter/mod.rs
// description: search result export module exports
// reference: internal module structure

pub mod json;
pub mod markdown;

pub use json::{ExportedSearch, JsonExporter};
