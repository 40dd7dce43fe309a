//! Ad blocks above and below the results.
//!
//! The block is parsed into one record per ad; the record type is the
//! block's location tag.

use dom_query::Selection;

use super::required_link;
use crate::components::Location;
use crate::dom;
use crate::error::ComponentError;
use crate::record::Record;
use crate::selector::{FieldChain, Strategy};

/// Ad items: list layout first, then the card layout.
const AD_ITEMS: &[&str] = &["li.ads-ad", "div.uEierd"];

const LINK: &str = "a[href]";

static TITLE: FieldChain =
    FieldChain::new(&[Strategy::Text(r#"div[role="heading"]"#), Strategy::Text("h3")]);

static CITE: FieldChain = FieldChain::new(&[Strategy::Text("span.Zu0yb"), Strategy::Text("cite")]);

static TEXT: FieldChain =
    FieldChain::new(&[Strategy::Text("div.MUxGbd"), Strategy::Text("div.ads-creative")]);

/// Parse the top ad block.
pub fn parse_top_ads(cmpt: &Selection) -> Result<Vec<Record>, ComponentError> {
    parse_ads(cmpt, Location::AdTop)
}

/// Parse the bottom ad block.
pub fn parse_bottom_ads(cmpt: &Selection) -> Result<Vec<Record>, ComponentError> {
    parse_ads(cmpt, Location::AdBottom)
}

fn parse_ads(cmpt: &Selection, location: Location) -> Result<Vec<Record>, ComponentError> {
    let items = AD_ITEMS
        .iter()
        .map(|selector| dom::each(&dom::query_selector_all(cmpt, selector)))
        .find(|items| !items.is_empty())
        .unwrap_or_default();

    items
        .iter()
        .enumerate()
        .map(|(sub_rank, item)| parse_ad(item, location, sub_rank))
        .collect()
}

fn parse_ad(item: &Selection, location: Location, sub_rank: usize) -> Result<Record, ComponentError> {
    let mut parsed = Record::new(location.as_str());
    parsed.sub_rank = sub_rank;

    let title = TITLE.extract(item).ok_or_else(|| ComponentError::missing("h3"))?;
    parsed.set("title", title);
    parsed.set("url", required_link(item, LINK)?);
    parsed.set_opt("cite", CITE.extract(item));
    parsed.set_opt("text", TEXT.extract(item));
    Ok(parsed)
}
