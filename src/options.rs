//! Configuration options for page parsing.
//!
//! The `Options` struct controls which components are extracted and how the
//! pipeline reports its progress.

/// Configuration options for page parsing.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use serp_parser::Options;
///
/// let options = Options {
///     include_ads: false,
///     serp_id: Some("abc123".to_string()),
///     ..Options::default()
/// };
/// assert!(!options.make_tree);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Extract the top and bottom ad blocks as components.
    ///
    /// Default: `true`
    pub include_ads: bool,

    /// Allow raw HTML input to be parsed into a document tree.
    ///
    /// When `false`, handing raw HTML to [`crate::SerpParser::parse_input`]
    /// fails with [`crate::Error::InputType`].
    ///
    /// Default: `false`
    pub make_tree: bool,

    /// Emit one info event per component with its rank and type.
    ///
    /// Default: `false`
    pub verbose: bool,

    /// Page identifier copied onto every record as `serp_id`.
    ///
    /// Default: `None`
    pub serp_id: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            include_ads: true,
            make_tree: false,
            verbose: false,
            serp_id: None,
        }
    }
}

impl Options {
    /// Returns a copy of these options with tree building enabled.
    #[must_use]
    pub fn with_tree(&self) -> Self {
        Self {
            make_tree: true,
            ..self.clone()
        }
    }

    /// Returns a copy of these options carrying the given page identifier.
    #[must_use]
    pub fn with_serp_id(&self, serp_id: Option<String>) -> Self {
        Self {
            serp_id,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_include_ads_only() {
        let opts = Options::default();
        assert!(opts.include_ads);
        assert!(!opts.make_tree);
        assert!(!opts.verbose);
        assert!(opts.serp_id.is_none());
    }

    #[test]
    fn with_tree_keeps_other_fields() {
        let opts = Options {
            include_ads: false,
            serp_id: Some("p1".into()),
            ..Options::default()
        };
        let tree = opts.with_tree();
        assert!(tree.make_tree);
        assert!(!tree.include_ads);
        assert_eq!(tree.serp_id.as_deref(), Some("p1"));
    }

    #[test]
    fn with_serp_id_replaces_identifier() {
        let opts = Options::default().with_serp_id(Some("x".into()));
        assert_eq!(opts.serp_id.as_deref(), Some("x"));
        assert!(opts.with_serp_id(None).serp_id.is_none());
    }
}
