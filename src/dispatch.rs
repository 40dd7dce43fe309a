//! Component parser dispatch.
//!
//! Routes one component to its registered parser and normalizes the outcome
//! into a non-empty list of ranked records. Parser faults, including panics,
//! stop here: they are logged and folded into a single error-bearing record,
//! so siblings on the same page are always parsed.

use std::panic::{self, AssertUnwindSafe};

use dom_query::Selection;
use tracing::error;

use crate::dom;
use crate::error::{ComponentError, Error, Result};
use crate::parsers::{ComponentParser, Lookup, ParserRegistry};
use crate::record::{Record, UNKNOWN};

/// Parse one component of the given type.
///
/// Returns the component's records with `sub_rank` set to each record's
/// position and `cmpt_rank` set to `cmpt_rank`. The list is never empty.
///
/// # Errors
///
/// [`Error::ContractViolation`] when `type_label` is neither `unknown` nor
/// registered. Parser failures are not errors; see the module docs.
pub fn parse_component(
    registry: &ParserRegistry,
    cmpt: &Selection,
    type_label: &str,
    cmpt_rank: usize,
) -> Result<Vec<Record>> {
    if type_label.is_empty() || type_label == UNKNOWN {
        return Ok(vec![Record::placeholder(UNKNOWN, cmpt_rank)]);
    }

    let parser = match registry.lookup(type_label) {
        Lookup::Parser(parser) => parser,
        Lookup::Unparsed => return Ok(vec![Record::placeholder(type_label, cmpt_rank)]),
        Lookup::Unregistered => {
            return Err(Error::ContractViolation(format!(
                "no parser registered for component type `{type_label}` (rank {cmpt_rank})"
            )))
        }
    };

    let records = match run_isolated(parser, cmpt) {
        Ok(records) if records.is_empty() => vec![Record::placeholder(type_label, cmpt_rank)],
        Ok(mut records) => {
            for (sub_rank, record) in records.iter_mut().enumerate() {
                record.sub_rank = sub_rank;
                record.cmpt_rank = cmpt_rank;
            }
            records
        }
        Err(err) => {
            let diagnostic = diagnostic(&err, type_label, cmpt_rank, cmpt);
            error!(cmpt_rank, cmpt_type = type_label, error = %err, "{}", diagnostic);
            vec![Record::failed(type_label, cmpt_rank, diagnostic)]
        }
    };

    Ok(records)
}

/// Run a parser, converting a panic into a [`ComponentError`].
fn run_isolated(parser: ComponentParser, cmpt: &Selection) -> std::result::Result<Vec<Record>, ComponentError> {
    panic::catch_unwind(AssertUnwindSafe(|| parser(cmpt)))
        .unwrap_or_else(|payload| Err(ComponentError::Panicked(panic_message(&*payload))))
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Maximum number of characters of the fragment quoted in a diagnostic.
const EXCERPT_CHARS: usize = 200;

fn diagnostic(err: &ComponentError, type_label: &str, cmpt_rank: usize, cmpt: &Selection) -> String {
    let html = dom::outer_html(cmpt);
    let excerpt: String = html.chars().take(EXCERPT_CHARS).collect();
    let ellipsis = if html.chars().count() > EXCERPT_CHARS { "..." } else { "" };
    format!("parsing `{type_label}` component at rank {cmpt_rank} failed: {err}\nfragment: {excerpt}{ellipsis}")
}
