//! Parsed record type.
//!
//! A [`Record`] is one logical result (or sub-result) of a page: a flat
//! mapping of string keys to scalar values. Rank and page-level keys are
//! typed fields; everything a type parser extracts lives in `fields`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Type label for components the classifier could not identify.
pub const UNKNOWN: &str = "unknown";

/// One flat result record.
///
/// Serializes as a single JSON object:
///
/// ```json
/// {"type":"general","sub_rank":0,"cmpt_rank":2,"serp_rank":3,
///  "qry":"weather","lang":"en","serp_id":null,"title":"...","url":"..."}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Type label of the record.
    #[serde(rename = "type")]
    pub kind: String,

    /// Position within the parent component.
    pub sub_rank: usize,

    /// Position of the parent component on the page.
    pub cmpt_rank: usize,

    /// Position of this record among all records on the page.
    pub serp_rank: usize,

    /// Query text taken from the document title.
    pub qry: Option<String>,

    /// Declared document language.
    pub lang: Option<String>,

    /// Caller-supplied page identifier.
    pub serp_id: Option<String>,

    /// Diagnostic text when the component failed to parse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Type-specific fields (`title`, `url`, `cite`, ...).
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

impl Record {
    /// Creates an empty record of the given type.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Creates the record reported for a component that has a type but no
    /// parsed content.
    #[must_use]
    pub fn placeholder(kind: impl Into<String>, cmpt_rank: usize) -> Self {
        Self {
            cmpt_rank,
            ..Self::new(kind)
        }
    }

    /// Creates the record reported for a component whose parser failed.
    #[must_use]
    pub fn failed(kind: impl Into<String>, cmpt_rank: usize, error: String) -> Self {
        Self {
            error: Some(error),
            ..Self::placeholder(kind, cmpt_rank)
        }
    }

    /// Sets a type-specific field.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.fields.insert(key.to_string(), value.into());
    }

    /// Sets a type-specific field only when a value was extracted.
    pub fn set_opt(&mut self, key: &str, value: Option<String>) {
        if let Some(v) = value {
            self.set(key, v);
        }
    }

    /// Returns a type-specific field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Whether this record came from a failed component parse.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
