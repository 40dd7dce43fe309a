//! Field extraction chains.
//!
//! Result markup changes over time, so most fields can be found in more than
//! one place. A [`FieldChain`] is an ordered list of [`Strategy`] values tried
//! against a fragment; the first strategy that yields a value wins, and the
//! field is absent when none does.
//!
//! ```rust
//! use serp_parser::selector::{FieldChain, Strategy};
//! use serp_parser::dom;
//!
//! static CITE: FieldChain = FieldChain::new(&[
//!     Strategy::Text("span.wqg8ad"),
//!     Strategy::Text("cite"),
//! ]);
//!
//! let doc = dom::parse("<div><cite>BBC News</cite></div>");
//! assert_eq!(CITE.extract(&doc.select("div")), Some("BBC News".to_string()));
//! ```

use dom_query::Selection;

use crate::dom;

/// One way of locating a field inside a fragment.
#[derive(Clone, Copy)]
pub enum Strategy {
    /// Collapsed text of the first element matching the selector.
    Text(&'static str),

    /// Attribute of the first element matching the selector. If that element
    /// lacks the attribute the strategy yields nothing; later matches are
    /// not consulted.
    Attr(&'static str, &'static str),
}

impl Strategy {
    fn apply(&self, sel: &Selection) -> Option<String> {
        match *self {
            Self::Text(selector) => {
                let found = dom::query_selector(sel, selector);
                if found.exists() {
                    dom::clean_text(&found)
                } else {
                    None
                }
            }
            Self::Attr(selector, attr) => {
                let found = dom::query_selector(sel, selector);
                dom::get_attribute(&found, attr)
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty())
            }
        }
    }
}

/// Ordered fallback list of strategies for one field.
pub struct FieldChain {
    strategies: &'static [Strategy],
}

impl FieldChain {
    /// Creates a chain; strategies are tried in the given order.
    #[must_use]
    pub const fn new(strategies: &'static [Strategy]) -> Self {
        Self { strategies }
    }

    /// Runs the chain against a fragment.
    #[must_use]
    pub fn extract(&self, sel: &Selection) -> Option<String> {
        self.strategies.iter().find_map(|s| s.apply(sel))
    }
}
