//! Page-level metadata extraction.
//!
//! Small pure functions over the document, computed once per page and copied
//! onto every record.

use dom_query::Document;

use crate::dom;

/// Separator between the query and the engine name in a results-page title.
const TITLE_SEPARATOR: &str = " - ";

/// Query text of a results page, taken from its `<title>`.
///
/// Titles have the form `"<query> - <rest>"`; everything before the first
/// `" - "` is the query. A title without the separator is returned whole.
///
/// ```rust
/// use serp_parser::{dom, metadata};
///
/// let doc = dom::parse("<html><head><title>weather - Google Search</title></head></html>");
/// assert_eq!(metadata::parse_query(&doc), Some("weather".to_string()));
/// ```
#[must_use]
pub fn parse_query(doc: &Document) -> Option<String> {
    let title = dom::find(doc, "title")?;
    let text = dom::text_content(&title);
    let query = text.split(TITLE_SEPARATOR).next().unwrap_or_default().trim();

    if query.is_empty() {
        None
    } else {
        Some(query.to_string())
    }
}

/// Declared language of the page (`<html lang="...">`), if any.
#[must_use]
pub fn parse_lang(doc: &Document) -> Option<String> {
    dom::find(doc, "html")
        .and_then(|html| dom::get_attribute(&html, "lang"))
        .map(|lang| lang.trim().to_string())
        .filter(|lang| !lang.is_empty())
}
