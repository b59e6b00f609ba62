// file: src/query/mod.rs
// description: search url construction module exports
// reference: internal module structure

pub mod builder;

pub use builder::QueryBuilder;
