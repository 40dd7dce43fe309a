//! Page-level parsing.
//!
//! [`SerpParser`] runs the full pipeline for one results page:
//!
//! 1. resolve the input to a document tree,
//! 2. extract components in page order,
//! 3. classify main-column components (other locations are typed by their
//!    location tag),
//! 4. dispatch each component to its parser,
//! 5. flatten the per-component records,
//! 6. stamp page-level fields and the final `serp_rank`.

use dom_query::Document;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::classifier::{Classify, DefaultClassifier};
use crate::components::{extract_components, Location};
use crate::error::{Error, Result};
use crate::metadata::{parse_lang, parse_query};
use crate::parsers::ParserRegistry;
use crate::record::Record;
use crate::{dispatch, dom, Options};

static DEFAULT_CLASSIFIER: DefaultClassifier = DefaultClassifier;

/// Input accepted by [`SerpParser::parse_input`].
#[derive(Clone, Copy)]
pub enum SerpInput<'a> {
    /// An already parsed document.
    Tree(&'a Document),
    /// Raw HTML; only accepted when [`Options::make_tree`] is set.
    Html(&'a str),
}

/// One page of a batch.
#[derive(Debug, Clone, Default)]
pub struct SerpPage {
    /// Identifier stamped on the page's records; overrides the parser's
    /// configured `serp_id` when set.
    pub serp_id: Option<String>,
    /// Raw page HTML.
    pub html: String,
}

/// Results-page parser.
///
/// Holds the parser registry and classifier to use, both read-only. The
/// default instance uses the process-wide catalog and [`DefaultClassifier`].
///
/// # Example
///
/// ```rust
/// use serp_parser::{dom, Options, SerpParser};
///
/// let doc = dom::parse(r#"<html lang="en"><head><title>rust - Google Search</title></head>
///   <body><div class="bkWMgd"><div class="g"><a href="https://www.rust-lang.org/"><h3>Rust</h3></a></div></div></body></html>"#);
///
/// let records = SerpParser::new(&Options::default()).parse_document(&doc)?;
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].kind, "general");
/// assert_eq!(records[0].qry.as_deref(), Some("rust"));
/// # Ok::<(), serp_parser::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct SerpParser<'r> {
    registry: &'r ParserRegistry,
    classifier: &'r dyn Classify,
    options: &'r Options,
}

impl<'r> SerpParser<'r> {
    /// Parser with the default catalog and classifier.
    #[must_use]
    pub fn new(options: &'r Options) -> Self {
        Self {
            registry: ParserRegistry::global(),
            classifier: &DEFAULT_CLASSIFIER,
            options,
        }
    }

    /// Uses the given registry instead of the default catalog.
    #[must_use]
    pub fn with_registry(self, registry: &'r ParserRegistry) -> Self {
        Self { registry, ..self }
    }

    /// Uses the given classifier instead of [`DefaultClassifier`].
    #[must_use]
    pub fn with_classifier(self, classifier: &'r dyn Classify) -> Self {
        Self { classifier, ..self }
    }

    /// Parse a tree, or raw HTML when tree building is enabled.
    ///
    /// # Errors
    ///
    /// [`Error::InputType`] for raw HTML when `make_tree` is off;
    /// [`Error::ContractViolation`] as for [`Self::parse_document`].
    pub fn parse_input(&self, input: SerpInput<'_>) -> Result<Vec<Record>> {
        match input {
            SerpInput::Tree(doc) => self.parse_document(doc),
            SerpInput::Html(html) if self.options.make_tree => self.parse_document(&dom::parse(html)),
            SerpInput::Html(_) => Err(Error::InputType(
                "received raw HTML while tree building is disabled".to_string(),
            )),
        }
    }

    /// Parse one results page into its ordered records.
    ///
    /// # Errors
    ///
    /// [`Error::ContractViolation`] when a component resolves to a type the
    /// registry does not know. Failures inside a single component never
    /// error; they yield an error-bearing record instead.
    pub fn parse_document(&self, doc: &Document) -> Result<Vec<Record>> {
        let serp_id = self.options.serp_id.as_deref();
        info!(serp_id, "parsing serp");

        let cmpts = extract_components(doc, self.options);
        let mut parsed = Vec::new();

        for (cmpt_rank, cmpt) in cmpts.iter().enumerate() {
            let cmpt_type = match cmpt.location {
                Location::Main => self.classifier.classify(&cmpt.fragment),
                other => other.as_str().to_string(),
            };
            if self.options.verbose {
                info!(cmpt_rank, cmpt_type = %cmpt_type, "component");
            }
            parsed.extend(dispatch::parse_component(
                self.registry,
                &cmpt.fragment,
                &cmpt_type,
                cmpt_rank,
            )?);
        }

        let qry = parse_query(doc);
        let lang = parse_lang(doc);
        for (serp_rank, record) in parsed.iter_mut().enumerate() {
            record.qry.clone_from(&qry);
            record.lang.clone_from(&lang);
            record.serp_id = serp_id.map(str::to_string);
            record.serp_rank = serp_rank;
        }

        debug!(serp_id, components = cmpts.len(), records = parsed.len(), "parsed serp");
        Ok(parsed)
    }

    /// Parse independent pages in parallel, one result per page in input
    /// order. Each page is parsed into its own tree.
    #[must_use]
    pub fn parse_batch(&self, pages: &[SerpPage]) -> Vec<Result<Vec<Record>>> {
        pages
            .par_iter()
            .map(|page| {
                let options = self
                    .options
                    .with_serp_id(page.serp_id.clone().or_else(|| self.options.serp_id.clone()));
                let parser = SerpParser {
                    registry: self.registry,
                    classifier: self.classifier,
                    options: &options,
                };
                parser.parse_document(&dom::parse(&page.html))
            })
            .collect()
    }
}
