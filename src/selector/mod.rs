//! Selector Infrastructure
//!
//! Rules are simple predicate functions over a selection, used by the
//! classifier to recognize component types. Field extraction chains live in
//! [`chain`].

use dom_query::Selection;

pub mod chain;
pub mod utils;

pub use chain::{FieldChain, Strategy};

/// A selector rule that tests if a selection matches certain criteria
pub type Rule = fn(&Selection) -> bool;

/// Query for first element matching the rule
///
/// Iterates through all descendants in document order and returns the first
/// element for which the rule returns true.
///
/// # Example
///
/// ```rust
/// use serp_parser::selector::{self, utils};
/// use serp_parser::dom;
///
/// let doc = dom::parse(r#"<div><h3 class="r">title</h3></div>"#);
/// let root = doc.select("div");
///
/// fn is_heading(sel: &dom_query::Selection) -> bool {
///     utils::is_tag(sel, "h3")
/// }
///
/// let result = selector::query(&root, is_heading);
/// assert!(result.is_some());
/// ```
#[must_use]
pub fn query<'a>(root: &Selection<'a>, rule: Rule) -> Option<Selection<'a>> {
    root.select("*")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .find(|sel| rule(sel))
}
