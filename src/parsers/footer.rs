//! Footer: related searches and the omitted-results notice.

use dom_query::Selection;

use crate::error::ComponentError;
use crate::record::Record;
use crate::selector::{FieldChain, Strategy};
use crate::{dom, url_utils};

const RELATED_LINKS: &[&str] = &["#brs a", "div.card-section a"];

static OMITTED_NOTICE: FieldChain = FieldChain::new(&[Strategy::Text("#ofr")]);

/// Parse the footer into `searches_related` records (one per link) followed
/// by an `omitted_notice` record when the notice is shown.
pub fn parse_footer(cmpt: &Selection) -> Result<Vec<Record>, ComponentError> {
    let links = RELATED_LINKS
        .iter()
        .map(|selector| dom::each(&dom::query_selector_all(cmpt, selector)))
        .find(|links| !links.is_empty())
        .unwrap_or_default();

    let mut records: Vec<Record> = links.iter().filter_map(parse_related).collect();

    if let Some(notice) = OMITTED_NOTICE.extract(cmpt) {
        let mut parsed = Record::new("omitted_notice");
        parsed.set("text", notice);
        records.push(parsed);
    }

    for (sub_rank, r) in records.iter_mut().enumerate() {
        r.sub_rank = sub_rank;
    }
    Ok(records)
}

/// Related-search links without a target or label are layout filler.
fn parse_related(link: &Selection) -> Option<Record> {
    let title = dom::clean_text(link)?;
    let href = dom::get_attribute(link, "href")?;

    let mut parsed = Record::new("searches_related");
    parsed.set("title", title);
    parsed.set("url", url_utils::resolve_result_link(&href));
    Some(parsed)
}
