//! Footer location.
//!
//! The footer region holds related searches and the "omitted results"
//! notice. It is located separately from the main column because it lives
//! outside it.

use dom_query::{Document, Selection};

use crate::dom;

/// Selector for the footer container.
pub const FOOTER: &str = "div#botstuff";

/// Locate the footer fragment of a page.
///
/// Returns `None` when the container is missing or carries no text.
#[must_use]
pub fn extract_footer(doc: &Document) -> Option<Selection<'_>> {
    dom::find(doc, FOOTER).filter(|footer| dom::clean_text(footer).is_some())
}
