// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Search request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Search API returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Search API error{}: {message}", code_suffix(.code))]
    Api {
        code: Option<String>,
        message: String,
    },

    #[error("Malformed search response: {0}")]
    MalformedResponse(String),

    #[error("Search for line {line} failed")]
    TermFailed {
        line: usize,
        #[source]
        source: Box<PipelineError>,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn code_suffix(code: &Option<String>) -> String {
    code.as_deref()
        .map(|c| format!(" (code {c})"))
        .unwrap_or_default()
}

impl PipelineError {
    /// True for failures scoped to a single term (as opposed to setup or
    /// output failures, which always end the run).
    pub fn is_term_failure(&self) -> bool {
        matches!(
            self,
            PipelineError::Request(_)
                | PipelineError::HttpStatus { .. }
                | PipelineError::Api { .. }
                | PipelineError::MalformedResponse(_)
        )
    }
}
