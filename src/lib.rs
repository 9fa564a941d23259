// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod models;
pub mod pipeline;
pub mod search;
pub mod taxonomy;
pub mod utils;

pub use config::{Config, Credentials, FailurePolicy, PipelineConfig, SearchConfig, SearchScope};
pub use error::{PipelineError, Result};
pub use exporter::JsonLinesWriter;
pub use extractor::PassageExtractor;
pub use models::{ExtractedTexts, SearchResult, Term};
pub use pipeline::{Extractor, ProgressTracker, RunStats};
pub use search::{SearchBackend, YandexClient};
pub use taxonomy::TaxonomyReader;
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = Config::default();
        let _parser = PassageExtractor::default();
        let _term = Term::new(1, "cat");
    }
}
