//! Component type classification.
//!
//! Main-column components are classified by an ordered list of rules; the
//! first rule that matches names the type. Components no rule recognizes are
//! reported as [`UNKNOWN`], which is a valid, degraded outcome rather than an
//! error.

use dom_query::Selection;

use crate::dom;
use crate::patterns::{MORE_NEWS_HEADING, VIDEOS_HEADING};
use crate::record::UNKNOWN;
use crate::selector::{self, utils, Rule};

/// Maps a component fragment to a type label.
///
/// Implementations must be shareable across threads so pages can be parsed
/// in parallel with a single classifier.
pub trait Classify: Send + Sync {
    /// Returns the type label for a main-column component, or `"unknown"`.
    fn classify(&self, cmpt: &Selection) -> String;
}

/// Rule-based classifier for Google result pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultClassifier;

/// Classification rules, tried in order.
const RULES: &[(&str, Rule)] = &[
    ("people_also_ask", is_people_also_ask),
    ("view_more_news", is_view_more_news),
    ("top_stories", is_top_stories),
    ("twitter", is_twitter),
    ("videos", is_videos),
    ("images", is_images),
    ("local_results", is_local_results),
    ("knowledge", is_knowledge),
    ("general", is_general),
];

impl Classify for DefaultClassifier {
    fn classify(&self, cmpt: &Selection) -> String {
        RULES
            .iter()
            .find(|(_, rule)| rule(cmpt))
            .map_or(UNKNOWN, |(label, _)| *label)
            .to_string()
    }
}

/// Section heading element (`h2`, or an ARIA level-2 heading).
fn is_section_heading(sel: &Selection) -> bool {
    utils::is_tag(sel, "h2")
        || (utils::attr(sel, "role") == "heading" && utils::attr(sel, "aria-level") == "2")
}

/// Text of the component's first section heading.
fn heading_text(cmpt: &Selection) -> Option<String> {
    selector::query(cmpt, is_section_heading).and_then(|h| dom::clean_text(&h))
}

fn heading_contains(cmpt: &Selection, needle: &str) -> bool {
    heading_text(cmpt).is_some_and(|h| h.to_lowercase().contains(needle))
}

fn is_people_also_ask(cmpt: &Selection) -> bool {
    utils::contains_match(cmpt, "div.related-question-pair")
}

fn is_view_more_news(cmpt: &Selection) -> bool {
    utils::contains_match(cmpt, "div.qmv19b")
        || heading_text(cmpt).is_some_and(|h| MORE_NEWS_HEADING.is_match(&h))
}

fn is_top_stories(cmpt: &Selection) -> bool {
    utils::contains_match(cmpt, "g-section-with-header") && heading_contains(cmpt, "top stories")
}

fn is_twitter(cmpt: &Selection) -> bool {
    heading_contains(cmpt, "twitter")
        || utils::contains_nested(cmpt, "g-section-with-header", r#"a[href*="twitter.com"]"#)
}

fn is_videos(cmpt: &Selection) -> bool {
    utils::contains_match(cmpt, "video-voyager")
        || heading_text(cmpt).is_some_and(|h| VIDEOS_HEADING.is_match(&h))
}

fn is_images(cmpt: &Selection) -> bool {
    utils::contains_match(cmpt, "#imagebox_bigimages")
        || heading_text(cmpt).is_some_and(|h| h.eq_ignore_ascii_case("images"))
}

fn is_local_results(cmpt: &Selection) -> bool {
    utils::contains_match(cmpt, "div.VkpGBb")
}

fn is_knowledge(cmpt: &Selection) -> bool {
    utils::contains_match(cmpt, "div.kp-blk") || utils::contains_match(cmpt, "div.knowledge-panel")
}

fn is_general(cmpt: &Selection) -> bool {
    utils::contains_nested(cmpt, "div.g", "h3")
        || (utils::has_class(cmpt, "g") && utils::contains_match(cmpt, "h3"))
}
