//! Decoding saved result pages to UTF-8.
//!
//! Pages saved from a browser or crawler may carry a byte-order mark or a
//! `<meta>` charset declaration in a legacy encoding.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// How far into the document a charset declaration is looked for.
const SNIFF_LEN: usize = 1024;

/// `charset=...` inside a `<meta>` tag, either as its own attribute or
/// within an http-equiv `content` value.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\b[^>]*?charset\s*=\s*["']?([A-Za-z0-9_:.\-]+)"#).expect("valid regex")
});

/// Detect a page's encoding: byte-order mark, then `<meta>` charset, then
/// UTF-8.
#[must_use]
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(SNIFF_LEN)]);
    META_CHARSET
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        // Meta-declared UTF-16 is read as UTF-8
        .map(Encoding::output_encoding)
        .unwrap_or(UTF_8)
}

/// Decode page bytes to a UTF-8 string.
///
/// Malformed sequences are replaced with U+FFFD rather than rejected.
///
/// ```
/// use serp_parser::encoding::decode_page;
///
/// let page = b"<meta charset=\"windows-1252\"><title>caf\xE9 - Google Search</title>";
/// assert!(decode_page(page).contains("caf\u{e9}"));
/// ```
#[must_use]
pub fn decode_page(bytes: &[u8]) -> String {
    let (decoded, _, _) = detect_encoding(bytes).decode(bytes);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_utf8() {
        assert_eq!(detect_encoding(b"<html><body>weather</body></html>"), UTF_8);
    }

    #[test]
    fn meta_charset_attribute() {
        let page = br#"<html><head><META CHARSET="ISO-8859-1"></head></html>"#;
        // ISO-8859-1 is an alias of windows-1252 in the WHATWG label table
        assert_eq!(detect_encoding(page).name(), "windows-1252");
    }

    #[test]
    fn http_equiv_content_type() {
        let page = br#"<meta http-equiv="Content-Type" content="text/html; charset=Shift_JIS">"#;
        assert_eq!(detect_encoding(page).name(), "Shift_JIS");
    }

    #[test]
    fn meta_utf16_means_utf8() {
        for label in ["utf-16", "UTF-16LE", "utf-16be"] {
            let page = format!(r#"<meta charset="{label}"><title>weather</title>"#);
            assert_eq!(detect_encoding(page.as_bytes()), UTF_8, "{label}");
            assert!(decode_page(page.as_bytes()).contains("<title>weather</title>"));
        }
    }

    #[test]
    fn unknown_label_falls_back() {
        assert_eq!(detect_encoding(br#"<meta charset="klingon">"#), UTF_8);
    }

    #[test]
    fn bom_wins_over_meta() {
        let mut page = vec![0xFF, 0xFE];
        for unit in "<meta charset=\"windows-1252\">hi".encode_utf16() {
            page.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(detect_encoding(&page).name(), "UTF-16LE");
        assert!(decode_page(&page).ends_with("hi"));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let decoded = decode_page(b"<p>rain \xFF\xFE today</p>");
        assert!(decoded.contains("rain"));
        assert!(decoded.contains('\u{FFFD}'));
        assert!(decoded.contains("today"));
    }
}
