// file: src/models/search_result.rs
// description: raw Yandex XML response for a single query
// reference: https://yandex.com/dev/xml/doc/dg/concepts/response.html

/// Response body as returned by the search API. Lives only while one term
/// is being processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    body: String,
}

impl SearchResult {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl From<String> for SearchResult {
    fn from(body: String) -> Self {
        Self::new(body)
    }
}
