// file: src/exporter/mod.rs
// description: output module exports
// reference: internal module structure

pub mod json;

pub use json::JsonLinesWriter;
