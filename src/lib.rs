//! # serp-parser
//!
//! Parses saved search engine result pages into flat, ranked records.
//!
//! A page is split into components (top ads, main-column results, bottom
//! ads, footer). Each main-column component is classified, dispatched to the
//! parser registered for its type, and flattened into records that carry
//! three ranks: position within the component (`sub_rank`), position of the
//! component (`cmpt_rank`), and position on the page (`serp_rank`).
//!
//! ## Quick Start
//!
//! ```rust
//! use serp_parser::{parse_serp, Options};
//!
//! let html = r#"<html lang="en"><head><title>weather - Google Search</title></head><body>
//!   <div class="bkWMgd"><div class="g">
//!     <a href="https://weather.example.com/"><h3>Local Weather</h3></a>
//!   </div></div>
//! </body></html>"#;
//!
//! let records = parse_serp(html, &Options::default())?;
//! assert_eq!(records[0].kind, "general");
//! assert_eq!(records[0].get("title"), Some("Local Weather"));
//! assert_eq!(records[0].qry.as_deref(), Some("weather"));
//! # Ok::<(), serp_parser::Error>(())
//! ```
//!
//! ## Failure model
//!
//! A component parser that fails (or panics) never aborts the page: the
//! component becomes a single record whose `error` field holds a diagnostic.
//! Only caller mistakes surface as [`Error`]: raw HTML passed where a tree is
//! required, or a classifier producing a type the registry does not know.

mod error;
mod options;
mod patterns;
mod record;

/// DOM operations over `dom_query` selections.
pub mod dom;

/// Selector helpers and fallback field extraction.
pub mod selector;

/// Component extraction (ads, main column, footer).
pub mod components;

/// Main-column component classification.
pub mod classifier;

/// Routing of components to their type parsers.
pub mod dispatch;

/// Type-specific component parsers and their registry.
pub mod parsers;

/// Page-level orchestration and batch parsing.
pub mod page;

/// Page-level metadata (query, language).
pub mod metadata;

/// Footer location.
pub mod footer;

/// Result link resolution.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use classifier::{Classify, DefaultClassifier};
pub use error::{ComponentError, Error, Result};
pub use options::Options;
pub use page::{SerpInput, SerpPage, SerpParser};
pub use parsers::{ComponentParser, ParserRegistry};
pub use record::{Record, UNKNOWN};

/// Parses an HTML results page with the default catalog.
///
/// The HTML is always parsed into a tree, regardless of
/// [`Options::make_tree`].
///
/// # Errors
///
/// See [`SerpParser::parse_document`].
pub fn parse_serp(html: &str, options: &Options) -> Result<Vec<Record>> {
    let options = options.with_tree();
    SerpParser::new(&options).parse_input(SerpInput::Html(html))
}

/// Parses a results page from raw bytes, detecting its encoding first.
///
/// # Example
///
/// ```rust
/// use serp_parser::{parse_serp_bytes, Options};
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"><title>caf\xE9 - Google Search</title></head></html>";
/// let records = parse_serp_bytes(html, &Options::default())?;
/// assert!(records.is_empty());
/// # Ok::<(), serp_parser::Error>(())
/// ```
///
/// # Errors
///
/// See [`SerpParser::parse_document`].
pub fn parse_serp_bytes(html: &[u8], options: &Options) -> Result<Vec<Record>> {
    parse_serp(&encoding::decode_page(html), options)
}

/// Parses an already built document tree.
///
/// # Errors
///
/// See [`SerpParser::parse_document`].
pub fn parse_document(doc: &dom::Document, options: &Options) -> Result<Vec<Record>> {
    SerpParser::new(options).parse_document(doc)
}

/// Parses independent pages in parallel; results are in input order.
#[must_use]
pub fn parse_serps(pages: &[SerpPage], options: &Options) -> Vec<Result<Vec<Record>>> {
    SerpParser::new(options).parse_batch(pages)
}
