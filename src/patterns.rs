//! Compiled regex patterns for the transformation pipeline.
//!
//! All patterns are compiled once at startup using `LazyLock` and shared
//! across calls. Patterns are organized by their pipeline stage.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Media-Element Rescue Patterns
// =============================================================================

/// Tag families whose address must be rescued before rendering, paired with
/// the attribute that carries it. The renderer drops these elements' content
/// entirely, so their URL would otherwise be lost.
pub const MEDIA_TAGS: &[(&str, &str)] = &[
    ("iframe", "src"),
    ("embed", "src"),
    ("video", "src"),
    ("audio", "src"),
    ("object", "data"),
];

/// One pattern per media tag family, matching both the paired
/// (`<tag ...>...</tag>`) and self-closing (`<tag .../>`) forms.
///
/// The address attribute may appear in any position but must be quoted
/// (single or double); the two alternation groups capture the two quoting
/// styles. The attribute match requires a preceding whitespace character so
/// that `data-src` and friends never match as `src`. An element without the
/// attribute (or with an empty value) does not match and passes through
/// untouched.
pub static MEDIA_ELEMENTS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    MEDIA_TAGS
        .iter()
        .map(|(tag, attr)| {
            Regex::new(&format!(
                r#"(?is)<{tag}\b[^>]*?\s{attr}\s*=\s*(?:"([^"]+)"|'([^']+)')[^>]*?(?:/\s*>|>.*?</{tag}\s*>)"#
            ))
            .expect("media element regex")
        })
        .collect()
});

// =============================================================================
// Wrapped-Link Patterns
// =============================================================================

/// Matches Outlook SafeLinks wrapper URLs in plain text.
///
/// Any subdomain prefix is accepted (`nam06.`, `eur01.`, ...) as well as the
/// bare host. The character class ends the match at whitespace or at the
/// delimiters that commonly follow a URL in rendered Markdown.
pub static SAFELINKS_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"https?://(?:[A-Za-z0-9-]+\.)*safelinks\.protection\.outlook\.com/[^\s<>"')\]]*"#,
    )
    .expect("SAFELINKS_URL regex")
});

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches every invisible character stripped by the normalizer: the Unicode
/// "format" category (zero-width joiners, directional marks, BOM, word
/// joiner, soft hyphen, ...) plus U+034F COMBINING GRAPHEME JOINER, which is
/// invisible but classified as a combining mark rather than a format
/// character.
pub static INVISIBLE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{Cf}\u{034F}]").expect("INVISIBLE_CHARS regex"));

/// Matches every Unicode space-separator character (category Zs): the
/// ordinary space, no-break space, en/em/thin/hair spaces, ideographic
/// space, narrow no-break space, and the rest of the category.
pub static SPACE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Zs}").expect("SPACE_SEPARATORS regex"));

/// Matches runs of ASCII spaces or tabs within a single line.
pub static SPACE_TAB_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("SPACE_TAB_RUNS regex"));

/// Matches runs of two or more ASCII spaces anywhere in the text.
pub static MULTI_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("MULTI_SPACE regex"));
