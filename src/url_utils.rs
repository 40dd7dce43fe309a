//! URL Utility Functions
//!
//! Result links on a results page are often relative (`/search?q=...`) or
//! wrapped in a click-tracking redirect (`/url?q=<target>&sa=...`). These
//! helpers turn them into the absolute destination URL.

use std::sync::LazyLock;

use url::Url;

/// Origin that relative links on a results page resolve against.
static SERP_BASE: LazyLock<Option<Url>> =
    LazyLock::new(|| Url::parse("https://www.google.com/").ok());

/// Query parameters that carry the destination of a redirect link.
const REDIRECT_PARAMS: &[&str] = &["q", "url"];

/// Parses `s` when it is an absolute http(s) URL with a host.
#[must_use]
pub fn parse_http_url(s: &str) -> Option<Url> {
    Url::parse(s.trim())
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
}

/// Resolves `href` against `base`; non-navigational schemes and unparsable
/// references come back unchanged.
#[must_use]
pub fn absolutize(href: &str, base: &Url) -> String {
    let href = href.trim();
    if href.is_empty() {
        return String::new();
    }
    if ["data:", "javascript:", "mailto:", "tel:"].iter().any(|p| href.starts_with(p)) {
        return href.to_string();
    }
    if let Some(url) = parse_http_url(href) {
        return url.to_string();
    }
    base.join(href).map_or_else(|_| href.to_string(), |url| url.to_string())
}

/// Resolve a result link to its destination.
///
/// Redirect wrappers (`/url?q=https://example.com/&sa=U`) are unwrapped to
/// the target they carry; other relative links are made absolute against the
/// results-page origin; absolute links pass through untouched.
///
/// ```rust
/// use serp_parser::url_utils::resolve_result_link;
///
/// assert_eq!(
///     resolve_result_link("/url?q=https://example.com/page&sa=U&ved=2ah"),
///     "https://example.com/page"
/// );
/// assert_eq!(
///     resolve_result_link("/search?q=weather+radar"),
///     "https://www.google.com/search?q=weather+radar"
/// );
/// ```
#[must_use]
pub fn resolve_result_link(href: &str) -> String {
    let href = href.trim();
    let Some(base) = SERP_BASE.as_ref() else {
        return href.to_string();
    };

    let absolute = absolutize(href, base);
    let Ok(parsed) = Url::parse(&absolute) else {
        return absolute;
    };

    if parsed.host_str() == base.host_str() && parsed.path() == "/url" {
        let target = parsed
            .query_pairs()
            .find(|(k, v)| REDIRECT_PARAMS.contains(&k.as_ref()) && parse_http_url(v).is_some())
            .map(|(_, v)| v.into_owned());
        if let Some(target) = target {
            return target;
        }
    }

    absolute
}
