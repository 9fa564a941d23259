// file: src/extractor/passages.rs
// description: pulls titles, headlines and passages out of a Yandex XML response
// reference: https://yandex.com/dev/xml/doc/dg/concepts/response.html

use crate::error::{PipelineError, Result};
use crate::extractor::patterns::{
    CODE_ATTRIBUTE, DOC_ELEMENT, ERROR_ELEMENT, FRAGMENT_ELEMENT, LANG_ELEMENT, MARKUP_TAG,
    NO_RESULTS_CODE, RESPONSE_ROOT,
};
use crate::models::{ExtractedTexts, SearchResult};
use tracing::debug;

/// Parser for a single search response. Works on the raw body only, so it can
/// be exercised against stored documents without a network.
#[derive(Debug, Clone)]
pub struct PassageExtractor {
    language: Option<String>,
}

impl PassageExtractor {
    /// `language` keeps only documents whose `<lang>` equals it; `None`
    /// keeps every document.
    pub fn new(language: Option<&str>) -> Self {
        Self {
            language: language.map(str::to_string),
        }
    }

    pub fn extract(&self, result: &SearchResult) -> Result<ExtractedTexts> {
        self.extract_from_xml(result.body())
    }

    pub fn extract_from_xml(&self, xml: &str) -> Result<ExtractedTexts> {
        if let Some(caps) = ERROR_ELEMENT.captures(xml) {
            let code = caps
                .name("attrs")
                .and_then(|attrs| CODE_ATTRIBUTE.captures(attrs.as_str()))
                .map(|code| code[1].to_string());

            if code.as_deref() == Some(NO_RESULTS_CODE) {
                debug!("Search returned no results");
                return Ok(ExtractedTexts::new());
            }

            let message = caps
                .name("message")
                .map(|m| inner_text(m.as_str()))
                .unwrap_or_default();

            return Err(PipelineError::Api { code, message });
        }

        if !RESPONSE_ROOT.is_match(xml) {
            return Err(PipelineError::MalformedResponse(
                "missing <yandexsearch> root element".to_string(),
            ));
        }

        let mut texts = ExtractedTexts::new();
        let mut skipped_docs = 0usize;

        for doc in DOC_ELEMENT.captures_iter(xml) {
            let body = doc.get(1).map(|m| m.as_str()).unwrap_or_default();

            if !self.accepts(body) {
                skipped_docs += 1;
                continue;
            }

            for fragment in FRAGMENT_ELEMENT.captures_iter(body) {
                let content = fragment
                    .name("title")
                    .or_else(|| fragment.name("headline"))
                    .or_else(|| fragment.name("passage"))
                    .map(|m| m.as_str())
                    .unwrap_or_default();
                texts.push(inner_text(content));
            }
        }

        debug!(
            "Extracted {} fragments, skipped {} documents by language",
            texts.len(),
            skipped_docs
        );

        Ok(texts)
    }

    fn accepts(&self, doc_body: &str) -> bool {
        let Some(wanted) = self.language.as_deref() else {
            return true;
        };

        LANG_ELEMENT
            .captures(doc_body)
            .map(|lang| lang[1].trim() == wanted)
            .unwrap_or(false)
    }
}

impl Default for PassageExtractor {
    fn default() -> Self {
        Self::new(Some("en"))
    }
}

/// Text content of an element body: nested tags dropped, entities decoded
/// once for the XML envelope and once for the HTML-escaped snippet inside it.
pub fn inner_text(fragment: &str) -> String {
    let stripped = MARKUP_TAG.replace_all(fragment, "");
    let xml_decoded = html_escape::decode_html_entities(&stripped);
    html_escape::decode_html_entities(&xml_decoded).into_owned()
}
