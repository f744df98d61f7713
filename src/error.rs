//! Error types for lettermark.
//!
//! The public `transform*` functions never surface these errors; they fall
//! back to returning the input unchanged. `try_transform` exposes them for
//! callers that want to observe failures directly.

/// Error type for transformation operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTML to Markdown engine rejected the document.
    #[error("markdown conversion failed: {0}")]
    Render(String),
}

/// Result type alias for transformation operations.
pub type Result<T> = std::result::Result<T, Error>;
