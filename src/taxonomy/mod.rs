// file: src/taxonomy/mod.rs
// description: taxonomy input module exports
// reference: internal module structure

mod reader;

pub use reader::TaxonomyReader;
