//! Configuration options for the transformation pipeline.
//!
//! The defaults reproduce the standard pipeline exactly; the toggles exist
//! for hosts that need to disable an individual pass.

/// Configuration options for the transformation pipeline.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use lettermark::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Keep image references in the output
/// let options = Options {
///     include_images: true,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Rewrite media elements (iframe, object, embed, video, audio) into
    /// plain paragraphs carrying their source URL before rendering.
    ///
    /// Default: `true`
    pub extract_media_urls: bool,

    /// Render image elements with the engine's default rule instead of
    /// removing them.
    ///
    /// When `false`, every image renders to the empty string. This also
    /// removes tracking pixels; a 1x1 image carries no information, and the
    /// general rule discards it without a dimension check.
    ///
    /// Default: `false`
    pub include_images: bool,

    /// Replace redirect-wrapped URLs (Outlook SafeLinks) with their decoded
    /// destination.
    ///
    /// Default: `true`
    pub unwrap_redirects: bool,

    /// Strip invisible Unicode format characters and the combining grapheme
    /// joiner from the output.
    ///
    /// Default: `true`
    pub strip_invisible: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            extract_media_urls: true,
            include_images: false,
            unwrap_redirects: true,
            strip_invisible: true,
        }
    }
}
