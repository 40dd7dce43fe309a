//! Type-specific component parsers and the registry that addresses them.
//!
//! Every catalog parser has the same shape: it takes one component fragment
//! and returns the component's records in on-page order, or a
//! [`ComponentError`] when the fragment cannot be parsed. Parsers that
//! describe a whole component return a single-element vector.
//!
//! The [`ParserRegistry`] maps type labels to parsers. A label may also be
//! registered without a parser, meaning "recognized, intentionally not
//! parsed". Registries are immutable once built.

use std::collections::HashMap;
use std::sync::LazyLock;

use dom_query::Selection;

use crate::error::ComponentError;
use crate::record::Record;
use crate::{dom, url_utils};

pub mod ads;
pub mod footer;
pub mod general;
pub mod view_more_news;

/// A type-specific component parser.
pub type ComponentParser = fn(&Selection) -> Result<Vec<Record>, ComponentError>;

/// Labels the default catalog recognizes but does not parse.
const UNPARSED_LABELS: &[&str] = &[
    "top_stories",
    "twitter",
    "knowledge",
    "images",
    "videos",
    "local_results",
    "people_also_ask",
];

static GLOBAL: LazyLock<ParserRegistry> = LazyLock::new(ParserRegistry::default_catalog);

/// Result of looking a label up in a registry.
#[derive(Debug, Clone, Copy)]
pub enum Lookup {
    /// The label has a parser.
    Parser(ComponentParser),
    /// The label is recognized but intentionally left unparsed.
    Unparsed,
    /// The label is not in the registry.
    Unregistered,
}

/// Immutable mapping from type label to parser.
#[derive(Debug, Clone)]
pub struct ParserRegistry {
    entries: HashMap<String, Option<ComponentParser>>,
}

impl ParserRegistry {
    /// Starts an empty registry.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The process-wide default catalog, built on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Builds the default catalog.
    #[must_use]
    pub fn default_catalog() -> Self {
        UNPARSED_LABELS
            .iter()
            .fold(Self::builder(), |b, label| b.unparsed(label))
            .register("general", general::parse_general)
            .register("view_more_news", view_more_news::parse_view_more_news)
            .register("ad-top", ads::parse_top_ads)
            .register("ad-bottom", ads::parse_bottom_ads)
            .register("footer", footer::parse_footer)
            .build()
    }

    /// Starts a builder seeded with this registry's entries.
    #[must_use]
    pub fn to_builder(&self) -> RegistryBuilder {
        RegistryBuilder {
            entries: self.entries.clone(),
        }
    }

    /// Looks up a type label.
    #[must_use]
    pub fn lookup(&self, label: &str) -> Lookup {
        match self.entries.get(label) {
            Some(Some(parser)) => Lookup::Parser(*parser),
            Some(None) => Lookup::Unparsed,
            None => Lookup::Unregistered,
        }
    }

    /// Whether the label is registered, with or without a parser.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    /// Registered labels, sorted.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }
}

/// Builder for a [`ParserRegistry`]. Later registrations of a label replace
/// earlier ones.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: HashMap<String, Option<ComponentParser>>,
}

impl RegistryBuilder {
    /// Registers a parser for a label.
    #[must_use]
    pub fn register(mut self, label: &str, parser: ComponentParser) -> Self {
        self.entries.insert(label.to_string(), Some(parser));
        self
    }

    /// Registers a label that is recognized but not parsed.
    #[must_use]
    pub fn unparsed(mut self, label: &str) -> Self {
        self.entries.insert(label.to_string(), None);
        self
    }

    /// Freezes the registry.
    #[must_use]
    pub fn build(self) -> ParserRegistry {
        ParserRegistry {
            entries: self.entries,
        }
    }
}

// === Shared field helpers ===

/// Text of a required element; fails when the element is missing.
pub(crate) fn required_text(sel: &Selection, selector: &str) -> Result<String, ComponentError> {
    let found = dom::query_selector(sel, selector);
    if !found.exists() {
        return Err(ComponentError::missing(selector));
    }
    Ok(dom::clean_text(&found).unwrap_or_default())
}

/// Destination of a required link; fails when the element or its `href` is
/// missing.
pub(crate) fn required_link(sel: &Selection, selector: &str) -> Result<String, ComponentError> {
    let found = dom::query_selector(sel, selector);
    if !found.exists() {
        return Err(ComponentError::missing(selector));
    }
    dom::get_attribute(&found, "href")
        .map(|href| url_utils::resolve_result_link(&href))
        .ok_or_else(|| ComponentError::missing_attr(selector, "href"))
}
