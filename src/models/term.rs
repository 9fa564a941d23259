// file: src/models/term.rs
// description: one taxonomy line and the Yandex query derived from it
// reference: Yandex XML query language, `+word` requires the word in matching documents

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// 1-based line number in the taxonomy file
    pub line: usize,

    /// Line content without the trailing newline
    pub raw: String,

    /// Words of the line, split on spaces and tabs
    pub words: Vec<String>,
}

impl Term {
    pub fn new(line: usize, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let words = raw
            .trim()
            .split([' ', '\t'])
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect();

        Self { line, raw, words }
    }

    pub fn is_blank(&self) -> bool {
        self.words.is_empty()
    }

    /// Every word must appear in a result: `+word0 +word1 ...`
    pub fn query(&self) -> String {
        self.words
            .iter()
            .map(|word| format!("+{}", word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_split_on_spaces_and_tabs() {
        let term = Term::new(3, "  machine\tlearning  model ");
        assert_eq!(term.line, 3);
        assert_eq!(term.words, vec!["machine", "learning", "model"]);
        assert!(!term.is_blank());
    }

    #[test]
    fn test_query_requires_every_word() {
        let term = Term::new(1, "red  fox");
        assert_eq!(term.query(), "+red +fox");
    }

    #[test]
    fn test_single_word_query() {
        assert_eq!(Term::new(1, "cat").query(), "+cat");
    }

    #[test]
    fn test_blank_line() {
        let term = Term::new(7, " \t ");
        assert!(term.is_blank());
        assert_eq!(term.query(), "");
    }

    #[test]
    fn test_non_ascii_words_kept() {
        let term = Term::new(1, "кошка домашняя");
        assert_eq!(term.query(), "+кошка +домашняя");
    }
}
