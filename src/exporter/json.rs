// file: src/exporter/json.rs
// description: writes one JSON array of extracted texts per line
// reference: https://jsonlines.org

use crate::error::{PipelineError, Result};
use crate::models::ExtractedTexts;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub struct JsonLinesWriter {
    path: PathBuf,
    writer: BufWriter<File>,
    lines_written: usize,
}

impl JsonLinesWriter {
    /// Creates the file, truncating any previous content.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = File::create(&path).map_err(|source| PipelineError::FileOperation {
            path: path.clone(),
            source,
        })?;

        info!("Writing results into {}", path.display());

        Ok(Self {
            path,
            writer: BufWriter::new(file),
            lines_written: 0,
        })
    }

    pub fn write(&mut self, texts: &ExtractedTexts) -> Result<()> {
        let line = texts.to_json_line()?;
        self.writer
            .write_all(line.as_bytes())
            .and_then(|_| self.writer.write_all(b"\n"))
            .map_err(|source| PipelineError::FileOperation {
                path: self.path.clone(),
                source,
            })?;
        self.lines_written += 1;
        Ok(())
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|source| PipelineError::FileOperation {
                path: self.path.clone(),
                source,
            })
    }

    /// Flushes and closes the file, returning the number of lines written.
    pub fn finish(mut self) -> Result<usize> {
        self.flush()?;
        Ok(self.lines_written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_writes_one_line_per_entry() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.jsonl");

        let mut writer = JsonLinesWriter::create(&path).unwrap();
        writer
            .write(&ExtractedTexts::from(vec!["a".to_string(), "b".to_string()]))
            .unwrap();
        writer.write(&ExtractedTexts::new()).unwrap();
        assert_eq!(writer.finish().unwrap(), 2);

        assert_eq!(fs::read_to_string(&path).unwrap(), "[\"a\", \"b\"]\n[]\n");
    }

    #[test]
    fn test_create_truncates_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.jsonl");
        fs::write(&path, "stale\nstale\nstale\n").unwrap();

        let writer = JsonLinesWriter::create(&path).unwrap();
        assert_eq!(writer.finish().unwrap(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_create_in_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let result = JsonLinesWriter::create(dir.path().join("missing/out.jsonl"));
        assert!(matches!(result, Err(PipelineError::FileOperation { .. })));
    }
}
