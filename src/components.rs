//! Component extraction.
//!
//! Walks a results page and produces the ordered list of components to parse:
//! the top ad block, the main-column results, the bottom ad block, and the
//! footer, in that order. Placeholder shells with no real content are dropped
//! here so they never reach a parser.

use std::fmt;

use dom_query::{Document, Selection};

use crate::{dom, footer, Options};

/// Top ad block.
const TOP_ADS: &str = "div#tads";

/// One main-column result block.
const MAIN_RESULT: &str = "div.bkWMgd";

/// Bottom ad block.
const BOTTOM_ADS: &str = "div#tadsb";

/// Text of main-column shells that render without results.
const PLACEHOLDER_LABELS: &[&str] = &["Twitter Results"];

/// Where on the page a component was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// Ad block above the results.
    AdTop,
    /// Result in the main column.
    Main,
    /// Ad block below the results.
    AdBottom,
    /// Page footer.
    Footer,
}

impl Location {
    /// The location tag, which doubles as type label outside the main column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AdTop => "ad-top",
            Self::Main => "main",
            Self::AdBottom => "ad-bottom",
            Self::Footer => "footer",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A located fragment of the page.
///
/// The component's position index is its index in the vector returned by
/// [`extract_components`].
#[derive(Clone)]
pub struct Component<'a> {
    /// Where the component was found.
    pub location: Location,
    /// The component's subtree.
    pub fragment: Selection<'a>,
}

impl<'a> Component<'a> {
    fn new(location: Location, fragment: Selection<'a>) -> Self {
        Self { location, fragment }
    }
}

/// Extract the page's components in top-to-bottom order.
///
/// Order is exactly: top ads, main results (document order), bottom ads,
/// footer. A page with none of these yields an empty vector.
#[must_use]
pub fn extract_components<'a>(doc: &'a Document, opts: &Options) -> Vec<Component<'a>> {
    let mut cmpts = Vec::new();

    if opts.include_ads {
        if let Some(ads) = dom::find(doc, TOP_ADS) {
            cmpts.push(Component::new(Location::AdTop, ads));
        }
    }

    cmpts.extend(
        dom::each(&doc.select(MAIN_RESULT))
            .into_iter()
            .filter(|c| !is_placeholder(c))
            .map(|c| Component::new(Location::Main, c)),
    );

    if opts.include_ads {
        if let Some(ads) = dom::find(doc, BOTTOM_ADS) {
            cmpts.push(Component::new(Location::AdBottom, ads));
        }
    }

    if let Some(footer) = footer::extract_footer(doc) {
        cmpts.push(Component::new(Location::Footer, footer));
    }

    cmpts
}

/// Whether a main-column fragment is an empty shell or a known placeholder.
fn is_placeholder(sel: &Selection) -> bool {
    match dom::clean_text(sel) {
        None => true,
        Some(text) => PLACEHOLDER_LABELS.contains(&text.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locations(cmpts: &[Component]) -> Vec<Location> {
        cmpts.iter().map(|c| c.location).collect()
    }

    #[test]
    fn orders_ads_main_and_footer() {
        let doc = dom::parse(r#"
            <div id="tadsb">bottom ad</div>
            <div class="bkWMgd">first</div>
            <div id="tads">top ad</div>
            <div class="bkWMgd">second</div>
            <div id="botstuff">related</div>
        "#);
        let cmpts = extract_components(&doc, &Options::default());

        assert_eq!(
            locations(&cmpts),
            vec![Location::AdTop, Location::Main, Location::Main, Location::AdBottom, Location::Footer]
        );
        assert_eq!(dom::text_content(&cmpts[1].fragment), "first".into());
        assert_eq!(dom::text_content(&cmpts[2].fragment), "second".into());
    }

    #[test]
    fn skips_ads_when_disabled() {
        let doc = dom::parse(r#"
            <div id="tads">top ad</div>
            <div class="bkWMgd">result</div>
            <div id="tadsb">bottom ad</div>
        "#);
        let opts = Options {
            include_ads: false,
            ..Options::default()
        };

        assert_eq!(locations(&extract_components(&doc, &opts)), vec![Location::Main]);
    }

    #[test]
    fn drops_empty_and_placeholder_shells() {
        let doc = dom::parse(r#"
            <div class="bkWMgd"></div>
            <div class="bkWMgd">   </div>
            <div class="bkWMgd"><h2>Twitter Results</h2></div>
            <div class="bkWMgd">real result</div>
        "#);
        let cmpts = extract_components(&doc, &Options::default());

        assert_eq!(cmpts.len(), 1);
        assert_eq!(dom::text_content(&cmpts[0].fragment), "real result".into());
    }

    #[test]
    fn empty_page_yields_nothing() {
        let doc = dom::parse("<html><body></body></html>");
        assert!(extract_components(&doc, &Options::default()).is_empty());
    }

    #[test]
    fn location_tags() {
        assert_eq!(Location::AdTop.as_str(), "ad-top");
        assert_eq!(Location::AdBottom.to_string(), "ad-bottom");
        assert_eq!(Location::Footer.as_str(), "footer");
    }
}
