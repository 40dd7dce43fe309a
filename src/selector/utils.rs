//! Utility functions for selector rules
//!
//! Helpers used by classifier rules and type parsers for attribute access,
//! class checks and ancestor traversal.

use crate::dom;
use dom_query::Selection;

// === DOM Traversal ===

/// Whether any ancestor of `sel`, below `boundary`, carries `class_name`.
///
/// Used to skip nested result blocks (a `div.g` inside another `div.g`).
#[must_use]
pub fn has_ancestor_with_class(sel: &Selection, class_name: &str, boundary: &Selection) -> bool {
    let stop = boundary.nodes().first().map(|n| n.id);
    let mut current = dom::parent(sel);

    while current.exists() {
        if current.nodes().first().map(|n| n.id) == stop {
            return false;
        }
        if has_class(&current, class_name) {
            return true;
        }
        current = dom::parent(&current);
    }

    false
}

// === Element Attribute Helpers ===

/// Get element class attribute (empty string if missing)
#[inline]
#[must_use]
pub fn class(sel: &Selection) -> String {
    dom::class_name(sel).unwrap_or_default()
}

/// Whether the element's class list contains `name` as a whole token
#[must_use]
pub fn has_class(sel: &Selection, name: &str) -> bool {
    class(sel).split_whitespace().any(|c| c == name)
}

/// Get any attribute (empty string if missing)
#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> String {
    dom::get_attribute(sel, name).unwrap_or_default()
}

/// Get tag name (empty string if missing)
#[inline]
#[must_use]
pub fn tag(sel: &Selection) -> String {
    dom::tag_name(sel).unwrap_or_default()
}

// === Element Type Checks ===

/// Check if element has a specific tag name
#[inline]
#[must_use]
pub fn is_tag(sel: &Selection, expected: &str) -> bool {
    tag(sel) == expected
}

/// Whether the fragment contains at least one element matching `selector`
///
/// Compound selectors are matched against the whole document, so ancestors
/// outside `sel` can satisfy them; use [`contains_nested`] to stay inside.
#[inline]
#[must_use]
pub fn contains_match(sel: &Selection, selector: &str) -> bool {
    sel.select_single(selector).exists()
}

/// Whether some descendant of `sel` matching `outer` itself contains a
/// match for `inner`.
#[must_use]
pub fn contains_nested(sel: &Selection, outer: &str, inner: &str) -> bool {
    dom::each(&sel.select(outer))
        .iter()
        .any(|found| contains_match(found, inner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn test_has_class_matches_whole_tokens() {
        let doc = dom::parse(r#"<div class="g tF2Cxc">x</div>"#);
        let div = doc.select("div");

        assert!(has_class(&div, "g"));
        assert!(has_class(&div, "tF2Cxc"));
        assert!(!has_class(&div, "tF2"));
    }

    #[test]
    fn test_attr_returns_value_or_empty() {
        let doc = dom::parse(r#"<img data-src="https://img/1.jpg">"#);
        let img = doc.select("img");

        assert_eq!(attr(&img, "data-src"), "https://img/1.jpg");
        assert_eq!(attr(&img, "src"), "");
    }

    #[test]
    fn test_is_tag() {
        let doc = dom::parse("<h3>title</h3>");
        let h3 = doc.select("h3");

        assert!(is_tag(&h3, "h3"));
        assert!(!is_tag(&h3, "h2"));
    }

    #[test]
    fn test_has_ancestor_with_class_respects_boundary() {
        let doc = dom::parse(r#"
            <div class="g" id="outer">
                <div class="bkWMgd" id="cmpt">
                    <div class="g" id="inner"><h3>t</h3></div>
                </div>
            </div>
        "#);
        let cmpt = doc.select("#cmpt");
        let inner = doc.select("#inner");

        // The outer .g sits above the component boundary
        assert!(!has_ancestor_with_class(&inner, "g", &cmpt));

        let outer = doc.select("#outer");
        assert!(has_ancestor_with_class(&inner, "g", &outer.parent()));
    }

    #[test]
    fn test_contains_nested_ignores_outer_ancestors() {
        let doc = dom::parse(r#"
            <div class="g">
                <div id="cmpt"><h3>heading</h3></div>
            </div>
        "#);
        let cmpt = doc.select("#cmpt");

        assert!(contains_match(&cmpt, "div.g h3"));
        assert!(!contains_nested(&cmpt, "div.g", "h3"));

        let doc = dom::parse(r#"<div id="cmpt"><div class="g"><h3>t</h3></div></div>"#);
        assert!(contains_nested(&doc.select("#cmpt"), "div.g", "h3"));
    }

    #[test]
    fn test_contains_match() {
        let doc = dom::parse(r#"<div><g-scrolling-carousel></g-scrolling-carousel></div>"#);
        let div = doc.select("div");

        assert!(contains_match(&div, "g-scrolling-carousel"));
        assert!(!contains_match(&div, "g-inner-card"));
    }
}
