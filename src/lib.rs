//! # lettermark
//!
//! Converts HTML email and document bodies into a compact, token-efficient
//! Markdown representation for language models and other text-oriented
//! consumers.
//!
//! The pipeline is three stages, applied in a fixed order:
//!
//! 1. **Media-URL rescue** — `<iframe>`, `<object>`, `<embed>`, `<video>`,
//!    and `<audio>` elements become plain paragraphs carrying their source
//!    URL, which would otherwise be lost in rendering.
//! 2. **Markdown rendering** — a configured HTML→Markdown conversion that
//!    suppresses non-content elements, drops every image (tracking pixels
//!    included), renders forced breaks as single newlines, and emits bare
//!    URLs for links whose text repeats their destination.
//! 3. **Text normalization** — unwraps redirect-wrapped (Outlook SafeLinks)
//!    URLs, strips invisible format characters, and collapses whitespace
//!    across the full Unicode space-separator category.
//!
//! Every call is pure and synchronous; the only shared state is immutable
//! pattern/renderer configuration, so concurrent use needs no coordination.
//!
//! ## Quick Start
//!
//! ```rust
//! use lettermark::transform;
//!
//! let html = "<h1>Status</h1><p>All&nbsp;good.</p>";
//! assert_eq!(transform(html), "# Status\n\nAll good.");
//! ```
//!
//! ## Failure behavior
//!
//! `transform` never panics and never returns an error: if the rendering
//! engine rejects the document, the original input is returned unchanged.
//! Not losing the caller's data outranks always producing Markdown.

mod error;
mod options;
mod patterns;

/// Charset detection and transcoding for byte input.
pub mod encoding;

/// Media-element URL rescue (pre-render pass).
pub mod media;

/// Post-render normalization passes.
pub mod normalize;

/// Markdown rendering configuration.
pub mod render;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;

/// Transforms an HTML body into normalized Markdown using default options.
///
/// Empty input is returned unchanged. On any internal failure the original
/// input is returned verbatim; this function never panics past its boundary.
///
/// # Example
///
/// ```rust
/// use lettermark::transform;
///
/// let html = r#"<p>See <a href="https://example.com">https://example.com</a></p>"#;
/// assert_eq!(transform(html), "See https://example.com");
/// ```
#[must_use]
pub fn transform(html: &str) -> String {
    transform_with_options(html, &Options::default())
}

/// Transforms an HTML body into normalized Markdown with custom options.
///
/// Same contract as [`transform`]: identity on empty input, original input
/// on internal failure, no panics.
///
/// # Example
///
/// ```rust
/// use lettermark::{transform_with_options, Options};
///
/// let options = Options {
///     include_images: true,
///     ..Options::default()
/// };
/// let md = transform_with_options(r#"<img src="logo.png" alt="Logo">"#, &options);
/// assert!(md.contains("logo.png"));
/// ```
#[must_use]
pub fn transform_with_options(html: &str, options: &Options) -> String {
    if html.is_empty() {
        return String::new();
    }
    match try_transform(html, options) {
        Ok(markdown) => markdown,
        Err(err) => {
            log::warn!("transform failed, returning input unchanged: {err}");
            html.to_string()
        }
    }
}

/// Transforms raw HTML bytes, detecting the declared charset first.
///
/// Accepts the document as bytes, transcodes to UTF-8 using any meta
/// charset declaration (defaulting to UTF-8, lossy), then runs the
/// standard pipeline.
#[must_use]
pub fn transform_bytes(html: &[u8]) -> String {
    let html_str = encoding::decode_html(html);
    transform(&html_str)
}

/// The fallible pipeline behind [`transform_with_options`].
///
/// Exposed for callers that want to observe rendering failures instead of
/// the silent passthrough fallback.
///
/// # Errors
///
/// Returns [`Error::Render`] when the HTML→Markdown engine rejects the
/// document.
pub fn try_transform(html: &str, options: &Options) -> Result<String> {
    let rescued = if options.extract_media_urls {
        media::extract_media_urls(html)
    } else {
        html.to_string()
    };

    let markdown = render::render(&rescued, options)?;
    log::debug!(
        "rendered {} chars of markup into {} chars of markdown",
        html.len(),
        markdown.len()
    );

    let markdown = if options.unwrap_redirects {
        normalize::unwrap_redirect_links(&markdown)
    } else {
        markdown
    };
    let markdown = if options.strip_invisible {
        normalize::strip_invisible_chars(&markdown)
    } else {
        markdown
    };
    Ok(normalize::normalize_whitespace(&markdown))
}
