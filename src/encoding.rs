//! Charset detection and transcoding for byte input.
//!
//! Email bodies regularly arrive in legacy encodings with the charset
//! declared in a meta tag. This module sniffs the declaration from the
//! document head and transcodes to UTF-8; decoding is lossy (invalid bytes
//! become the replacement character) and never fails.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Bytes of the document head examined for a charset declaration.
const SNIFF_LIMIT: usize = 2048;

/// Matches the charset label in either declaration form:
/// `<meta charset="...">` or
/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`.
/// A single pattern covers both because each puts `charset=` inside the
/// meta tag with the label immediately after.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("META_CHARSET regex")
});

/// Decode raw HTML bytes to a UTF-8 string.
///
/// Honors a meta charset declaration in the first 2 KiB; defaults to UTF-8
/// when none is found or the label is unknown.
///
/// # Examples
///
/// ```
/// use lettermark::encoding::decode_html;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(decode_html(html).contains("Caf\u{e9}"));
/// ```
#[must_use]
pub fn decode_html(bytes: &[u8]) -> String {
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(SNIFF_LIMIT)]);
    let encoding = declared_encoding(&head).unwrap_or(UTF_8);
    let (decoded, _, _) = encoding.decode(bytes);
    decoded.into_owned()
}

/// Look up the declared charset, if any, against the WHATWG encoding set.
fn declared_encoding(head: &str) -> Option<&'static Encoding> {
    let label = META_CHARSET.captures(head)?.get(1)?.as_str();
    Encoding::for_label(label.trim().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_utf8_without_declaration() {
        assert_eq!(decode_html(b"<p>plain</p>"), "<p>plain</p>");
    }

    #[test]
    fn honors_meta_charset() {
        let html = b"<meta charset=\"windows-1252\"><p>\x93quoted\x94</p>";
        let decoded = decode_html(html);
        assert!(decoded.contains("\u{201C}quoted\u{201D}"));
    }

    #[test]
    fn honors_http_equiv_content_type() {
        let html =
            b"<meta http-equiv=\"Content-Type\" content=\"text/html; charset=ISO-8859-1\"><p>caf\xE9</p>";
        assert!(decode_html(html).contains("caf\u{e9}"));
    }

    #[test]
    fn accepts_unquoted_charset_labels() {
        let head = "<meta charset=utf-8>";
        assert_eq!(declared_encoding(head), Some(UTF_8));
    }

    #[test]
    fn unknown_labels_fall_back_to_utf8() {
        let html = b"<meta charset=\"no-such-charset\"><p>text</p>";
        assert_eq!(decode_html(html), "<meta charset=\"no-such-charset\"><p>text</p>");
    }

    #[test]
    fn invalid_bytes_become_replacement_characters() {
        let decoded = decode_html(b"ok \xFF\xFE still ok");
        assert!(decoded.contains("ok"));
        assert!(decoded.contains("still ok"));
    }
}
