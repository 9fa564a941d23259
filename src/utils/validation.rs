// file: src/utils/validation.rs
// description: input validation run before any search request is made
// reference: input validation patterns

use crate::error::{PipelineError, Result};
use std::fs;
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_input_file(path: &Path) -> Result<()> {
        let metadata = fs::metadata(path).map_err(|e| {
            PipelineError::Validation(format!(
                "Cannot read taxonomy file {}: {}",
                path.display(),
                e
            ))
        })?;

        if !metadata.is_file() {
            return Err(PipelineError::Validation(format!(
                "Taxonomy path is not a file: {}",
                path.display()
            )));
        }

        Ok(())
    }

    /// The output file is created or truncated, so only its directory has to exist.
    pub fn validate_output_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(PipelineError::Validation(
                "Output path is empty".to_string(),
            ));
        }

        if path.is_dir() {
            return Err(PipelineError::Validation(format!(
                "Output path is a directory: {}",
                path.display()
            )));
        }

        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
                Err(PipelineError::Validation(format!(
                    "Output directory does not exist: {}",
                    parent.display()
                )))
            }
            _ => Ok(()),
        }
    }

    pub fn validate_distinct_paths(input: &Path, output: &Path) -> Result<()> {
        let same = match (fs::canonicalize(input), fs::canonicalize(output)) {
            (Ok(a), Ok(b)) => a == b,
            _ => input == output,
        };

        if same {
            return Err(PipelineError::Validation(format!(
                "Output would overwrite the taxonomy file: {}",
                output.display()
            )));
        }

        Ok(())
    }

    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((idx, _)) => format!("{}...", &text[..idx]),
            None => text.to_string(),
        }
    }
}
