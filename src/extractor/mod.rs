// file: src/extractor/mod.rs
// description: search response extraction module exports
// reference: internal module structure

pub mod passages;
pub mod patterns;

pub use passages::{PassageExtractor, inner_text};
