//! Error types for serp-parser.
//!
//! Two layers of failure exist. [`Error`] aborts a whole page and is returned
//! to the caller. [`ComponentError`] is raised by a single component parser and
//! never leaves the dispatcher: it is logged and folded into an error-bearing
//! record for that component.

/// Error type for page-level parsing operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The resolved input is not a parsed document tree.
    #[error("Input must be a parsed document tree: {0}")]
    InputType(String),

    /// The parser registry cannot serve a resolved component type.
    #[error("Parser registry contract violated: {0}")]
    ContractViolation(String),
}

/// Result type alias for page-level operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure raised while parsing the content of one component.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComponentError {
    /// A required element was not found in the fragment.
    #[error("required element `{selector}` not found")]
    MissingElement {
        /// CSS selector that matched nothing.
        selector: String,
    },

    /// A required element was found but lacks the attribute being read.
    #[error("element `{selector}` has no `{attr}` attribute")]
    MissingAttribute {
        /// CSS selector of the element.
        selector: String,
        /// Attribute name.
        attr: String,
    },

    /// The fragment does not have the shape the parser expects.
    #[error("malformed component: {0}")]
    Malformed(String),

    /// The parser panicked; carries the panic message.
    #[error("parser panicked: {0}")]
    Panicked(String),
}

impl ComponentError {
    pub(crate) fn missing(selector: &str) -> Self {
        Self::MissingElement {
            selector: selector.to_string(),
        }
    }

    pub(crate) fn missing_attr(selector: &str, attr: &str) -> Self {
        Self::MissingAttribute {
            selector: selector.to_string(),
            attr: attr.to_string(),
        }
    }
}
