//! Post-render text normalization.
//!
//! Three pure string passes applied in order after Markdown rendering:
//! redirect-link unwrapping, invisible-character removal, and whitespace
//! normalization. Each pass takes the previous pass's output; none assumes
//! any line-ending convention beyond `\n`.

use percent_encoding::percent_decode_str;
use regex::Captures;
use url::Url;

use crate::patterns::{
    INVISIBLE_CHARS, MULTI_SPACE, SAFELINKS_URL, SPACE_SEPARATORS, SPACE_TAB_RUNS,
};

/// Replace redirect-wrapped URLs with their decoded destination.
///
/// Outlook SafeLinks routes every link in a message body through
/// `*.safelinks.protection.outlook.com`, carrying the true destination
/// URL-encoded in the `url` query parameter. The wrapper is pure overhead
/// for a text consumer, and three times the length of the address it hides.
///
/// Operates on plain text, so wrapped URLs are caught wherever they appear —
/// inside `[]()` syntax or in running prose. A wrapper whose destination
/// cannot be recovered (missing `url` parameter, percent-decoding that does
/// not yield UTF-8, or a decoded value that is not an http(s) URL) is left
/// byte-for-byte untouched rather than replaced with a partial result.
#[must_use]
pub fn unwrap_redirect_links(text: &str) -> String {
    SAFELINKS_URL
        .replace_all(text, |caps: &Captures| {
            let wrapped = &caps[0];
            unwrap_destination(wrapped).unwrap_or_else(|| wrapped.to_string())
        })
        .into_owned()
}

/// Extract and decode the destination carried by a wrapper URL.
fn unwrap_destination(wrapped: &str) -> Option<String> {
    let parsed = Url::parse(wrapped).ok()?;
    // Raw query, split by hand: the failure mode of the percent-decode must
    // stay observable, and Url's query_pairs() hides it.
    let query = parsed.query()?;
    let encoded = query.split('&').find_map(|pair| pair.strip_prefix("url="))?;
    let decoded = percent_decode_str(encoded).decode_utf8().ok()?;
    if decoded.starts_with("http://") || decoded.starts_with("https://") {
        Some(decoded.into_owned())
    } else {
        None
    }
}

/// Strip invisible Unicode characters.
///
/// Removes every character in the "format" general category (zero-width
/// joiners and non-joiners, directional marks and embeddings, byte-order
/// mark, word joiner, soft hyphen, ...) plus U+034F COMBINING GRAPHEME
/// JOINER. Mail clients and copy-paste pipelines inject these freely; they
/// render no glyph and inflate downstream token counts. Removal is
/// unconditional — nothing about the character alone says whether its use
/// was intentional.
#[must_use]
pub fn strip_invisible_chars(text: &str) -> String {
    INVISIBLE_CHARS.replace_all(text, "").into_owned()
}

/// Normalize whitespace across the full Unicode space-separator category.
///
/// The stages run in a fixed order:
///
/// 1. Map every space-separator character (category Zs) to the ASCII space.
///    Unification must come first: a mixed run of no-break, em, and thin
///    spaces only collapses once every member looks the same.
/// 2. Per line, collapse runs of spaces/tabs to one space and trim the ends.
/// 3. Rejoin, suppressing consecutive blank lines down to at most one, so
///    paragraph separation survives but runs of 3+ newlines do not.
/// 4. Collapse any remaining run of 2+ spaces across the joined text. This
///    repeats step 2 on purpose: line-joining can make spaces adjacent that
///    per-line processing could not see.
/// 5. Trim the result.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    let unified = SPACE_SEPARATORS.replace_all(text, " ");

    let mut joined = String::with_capacity(unified.len());
    let mut previous_blank = false;
    let mut first = true;
    for raw_line in unified.split('\n') {
        let collapsed = SPACE_TAB_RUNS.replace_all(raw_line, " ");
        let line = collapsed.trim();
        let blank = line.is_empty();
        if blank && previous_blank {
            continue;
        }
        if !first {
            joined.push('\n');
        }
        joined.push_str(line);
        previous_blank = blank;
        first = false;
    }

    MULTI_SPACE.replace_all(&joined, " ").trim().to_string()
}
