//! Media-URL rescue pass.
//!
//! The Markdown engine drops `<iframe>`, `<object>`, `<embed>`, `<video>`,
//! and `<audio>` elements wholesale, which would lose the one piece of
//! information they carry in an email body: the address of the embedded
//! resource. This pre-pass rewrites each such element into a plain paragraph
//! containing only that address, so it survives rendering as ordinary text.

use regex::Captures;

use crate::patterns::MEDIA_ELEMENTS;

/// Replace media elements with `<p>URL</p>` placeholders.
///
/// Both the paired and self-closing forms are rewritten; the address
/// attribute (`src`, or `data` for `<object>`) may appear in any position
/// but must be quoted. Elements without an address are left unmodified —
/// synthesizing an empty paragraph would itself be an artifact. Malformed
/// tags never match and pass through untouched; this pass cannot fail.
///
/// # Example
///
/// ```rust
/// use lettermark::media::extract_media_urls;
///
/// let html = r#"<iframe src="https://player.example/v/42"></iframe>"#;
/// assert_eq!(extract_media_urls(html), "<p>https://player.example/v/42</p>");
/// ```
#[must_use]
pub fn extract_media_urls(html: &str) -> String {
    let mut result = html.to_string();
    for pattern in MEDIA_ELEMENTS.iter() {
        if pattern.is_match(&result) {
            result = pattern
                .replace_all(&result, |caps: &Captures| {
                    let address = caps
                        .get(1)
                        .or_else(|| caps.get(2))
                        .map_or("", |m| m.as_str());
                    format!("<p>{address}</p>")
                })
                .into_owned();
        }
    }
    result
}
