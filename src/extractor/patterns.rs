// file: src/extractor/patterns.rs
// description: compiled regex patterns for Yandex XML response extraction
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Response envelope
    pub static ref RESPONSE_ROOT: Regex = Regex::new(
        r"(?s)<yandexsearch\b[^>]*>.*</yandexsearch\s*>"
    ).expect("RESPONSE_ROOT regex is valid");

    pub static ref ERROR_ELEMENT: Regex = Regex::new(
        r"(?s)<error\b(?P<attrs>[^>]*?)(?:/>|>(?P<message>.*?)</error\s*>)"
    ).expect("ERROR_ELEMENT regex is valid");

    pub static ref CODE_ATTRIBUTE: Regex = Regex::new(
        r#"\bcode\s*=\s*["']([^"']*)["']"#
    ).expect("CODE_ATTRIBUTE regex is valid");

    // Result documents
    pub static ref DOC_ELEMENT: Regex = Regex::new(
        r"(?s)<doc\b[^>]*>(.*?)</doc\s*>"
    ).expect("DOC_ELEMENT regex is valid");

    pub static ref LANG_ELEMENT: Regex = Regex::new(
        r"(?s)<lang\b[^>]*>(.*?)</lang\s*>"
    ).expect("LANG_ELEMENT regex is valid");

    // Titles, headlines and passages in document order. The self-closing
    // alternative comes first so `<title/>` never opens a match.
    pub static ref FRAGMENT_ELEMENT: Regex = Regex::new(
        r"(?s)<(?:title|headline|passage)\b[^>]*/>|<title\b[^>]*>(?P<title>.*?)</title\s*>|<headline\b[^>]*>(?P<headline>.*?)</headline\s*>|<passage\b[^>]*>(?P<passage>.*?)</passage\s*>"
    ).expect("FRAGMENT_ELEMENT regex is valid");

    // Inline markup inside a fragment, e.g. <hlword>
    pub static ref MARKUP_TAG: Regex = Regex::new(
        r"<[^>]*>"
    ).expect("MARKUP_TAG regex is valid");
}

/// Yandex reports an empty result set as error code 15.
pub const NO_RESULTS_CODE: &str = "15";
