//! Organic ("general") results.

use dom_query::Selection;

use super::{required_link, required_text};
use crate::dom;
use crate::error::ComponentError;
use crate::record::Record;
use crate::selector::{utils, FieldChain, Strategy};

const TYPE_LABEL: &str = "general";

const RESULT: &str = "div.g";
const TITLE: &str = "h3";
const LINK: &str = "a[href]";

static CITE: FieldChain = FieldChain::new(&[Strategy::Text("cite")]);

static SNIPPET: FieldChain = FieldChain::new(&[
    Strategy::Text("span.st"),
    Strategy::Text("div.IsZvec"),
    Strategy::Text("div.VwiC3b"),
]);

/// Parse a general component.
///
/// One record per outermost titled `div.g` block; a component without such
/// blocks is parsed as a single result.
pub fn parse_general(cmpt: &Selection) -> Result<Vec<Record>, ComponentError> {
    let mut results: Vec<Selection> = dom::each(&dom::query_selector_all(cmpt, RESULT))
        .into_iter()
        .filter(|r| utils::contains_match(r, TITLE))
        .filter(|r| !utils::has_ancestor_with_class(r, "g", cmpt))
        .collect();
    if results.is_empty() {
        results.push(cmpt.clone());
    }

    results
        .iter()
        .enumerate()
        .map(|(sub_rank, r)| parse_result(r, sub_rank))
        .collect()
}

fn parse_result(result: &Selection, sub_rank: usize) -> Result<Record, ComponentError> {
    let mut parsed = Record::new(TYPE_LABEL);
    parsed.sub_rank = sub_rank;
    parsed.set("title", required_text(result, TITLE)?);
    parsed.set("url", required_link(result, LINK)?);
    parsed.set_opt("cite", CITE.extract(result));
    parsed.set_opt("text", SNIPPET.extract(result));
    Ok(parsed)
}
