//! "View more news" components.
//!
//! A vertically stacked or scrolling tray of news cards with a news icon in
//! the header. Each card becomes one record.

use dom_query::Selection;

use super::{required_link, required_text};
use crate::dom;
use crate::error::ComponentError;
use crate::record::Record;
use crate::selector::{FieldChain, Strategy};

const TYPE_LABEL: &str = "view_more_news";

/// Card container in the stacked layout; its element children are the cards.
const STACKED_CONTAINER: &str = "div.qmv19b";

/// Carousel layout and its cards.
const CAROUSEL: &str = "g-scrolling-carousel";
const CAROUSEL_CARD: &str = "g-inner-card";

const TITLE: &str = "div.jBgGLd";
const LINK: &str = "a";

static CITE: FieldChain = FieldChain::new(&[Strategy::Text("span.wqg8ad"), Strategy::Text("cite")]);

static TIMESTAMP: FieldChain =
    FieldChain::new(&[Strategy::Text("span.FGlSad"), Strategy::Text("span.f")]);

/// Lazy-loaded images only carry their URL in `data-src` once loaded.
static IMG_URL: FieldChain = FieldChain::new(&[Strategy::Attr("img", "data-src")]);

/// Parse a "view more news" component into one record per card.
///
/// A component with neither card layout yields no records.
pub fn parse_view_more_news(cmpt: &Selection) -> Result<Vec<Record>, ComponentError> {
    find_cards(cmpt)
        .iter()
        .enumerate()
        .map(|(sub_rank, card)| parse_card(card, sub_rank))
        .collect()
}

fn find_cards<'a>(cmpt: &Selection<'a>) -> Vec<Selection<'a>> {
    let stacked = dom::query_selector(cmpt, STACKED_CONTAINER);
    if stacked.exists() {
        return dom::each(&dom::children(&stacked));
    }

    let carousel = dom::query_selector(cmpt, CAROUSEL);
    if carousel.exists() {
        return dom::each(&dom::query_selector_all(&carousel, CAROUSEL_CARD));
    }

    Vec::new()
}

fn parse_card(card: &Selection, sub_rank: usize) -> Result<Record, ComponentError> {
    let mut parsed = Record::new(TYPE_LABEL);
    parsed.sub_rank = sub_rank;
    parsed.set("title", required_text(card, TITLE)?);
    parsed.set("url", required_link(card, LINK)?);
    parsed.set_opt("cite", CITE.extract(card));
    parsed.set_opt("timestamp", TIMESTAMP.extract(card));
    parsed.set_opt("img_url", IMG_URL.extract(card));
    Ok(parsed)
}
