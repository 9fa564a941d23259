// file: src/taxonomy/reader.rs
// description: reads the taxonomy file into ordered search terms
// reference: one term per line, order preserved, duplicates kept

use crate::error::{PipelineError, Result};
use crate::models::Term;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub struct TaxonomyReader;

impl TaxonomyReader {
    pub fn read(path: &Path) -> Result<Vec<Term>> {
        info!("Reading taxonomy file: {}", path.display());

        let content = fs::read_to_string(path).map_err(|source| PipelineError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        let terms = Self::parse(&content);

        let blank = terms.iter().filter(|term| term.is_blank()).count();
        debug!("Read {} lines ({} blank)", terms.len(), blank);

        Ok(terms)
    }

    /// One term per line. `\n`, `\r\n` and a lone `\r` all end a line; a
    /// trailing line ending does not add a line. A UTF-8 byte order mark on
    /// the first line is dropped.
    pub fn parse(content: &str) -> Vec<Term> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let normalized = content.replace("\r\n", "\n");

        normalized
            .split_terminator(['\n', '\r'])
            .enumerate()
            .map(|(idx, line)| Term::new(idx + 1, line))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_keeps_order_and_duplicates() {
        let terms = TaxonomyReader::parse("cat\ndog\ncat\n");
        let raws: Vec<&str> = terms.iter().map(|t| t.raw.as_str()).collect();
        assert_eq!(raws, vec!["cat", "dog", "cat"]);
        assert_eq!(terms[2].line, 3);
    }

    #[test]
    fn test_parse_without_trailing_newline() {
        assert_eq!(TaxonomyReader::parse("cat\ndog").len(), 2);
    }

    #[test]
    fn test_parse_keeps_blank_lines() {
        let terms = TaxonomyReader::parse("cat\n\n  \ndog\n");
        assert_eq!(terms.len(), 4);
        assert!(terms[1].is_blank());
        assert!(terms[2].is_blank());
        assert_eq!(terms[3].words, vec!["dog"]);
    }

    #[test]
    fn test_parse_crlf_and_bom() {
        let terms = TaxonomyReader::parse("\u{feff}big cat\r\nsmall dog\r\n");
        assert_eq!(terms.len(), 2);
        assert_eq!(terms[0].query(), "+big +cat");
        assert_eq!(terms[1].query(), "+small +dog");
    }

    #[test]
    fn test_parse_lone_carriage_returns() {
        let terms = TaxonomyReader::parse("cat\rdog\r\rbird\r");
        assert_eq!(terms.len(), 4);
        assert_eq!(terms[1].words, vec!["dog"]);
        assert!(terms[2].is_blank());
        assert_eq!(terms[3].line, 4);
    }

    #[test]
    fn test_parse_mixed_line_endings() {
        let terms = TaxonomyReader::parse("cat\r\ndog\rbird\n");
        let raws: Vec<&str> = terms.iter().map(|t| t.raw.as_str()).collect();
        assert_eq!(raws, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_parse_empty_file() {
        assert!(TaxonomyReader::parse("").is_empty());
    }

    #[test]
    fn test_read_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = TaxonomyReader::read(&temp.path().join("missing.txt"));
        assert!(matches!(result, Err(PipelineError::FileOperation { .. })));
    }

    #[test]
    fn test_read_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("taxonomy.txt");
        fs::write(&path, "neural network\ndecision tree\n").unwrap();

        let terms = TaxonomyReader::read(&path).unwrap();
        assert_eq!(terms.len(), 2);
        assert_eq!(terms[0].words, vec!["neural", "network"]);
    }
}
