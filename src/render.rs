//! Markdown rendering stage.
//!
//! Wraps the htmd HTML-to-Markdown engine with the rule set this pipeline
//! needs: a fixed element-suppression list, compact heading/list/code
//! options, and custom handlers for line breaks, images, and links. The two
//! converter configurations (with and without image output) are built once
//! and shared across calls; they hold no per-call state.

use std::sync::LazyLock;

use htmd::element_handler::{HandlerResult, Handlers};
use htmd::options::{BulletListMarker, CodeBlockFence, CodeBlockStyle, HeadingStyle};
use htmd::{Element, HtmlToMarkdown};

use crate::error::{Error, Result};
use crate::options::Options;

/// Tags whose entire subtree is machine-generated noise, not authored
/// content: scripts, style sheets, no-script fallbacks, templates (never
/// rendered by a mail client), and graphical containers. Membership is
/// static and independent of attributes.
///
/// `nav`, `footer`, `aside`, and form containers are deliberately absent:
/// in email bodies these regularly hold authored text.
pub const SUPPRESSED_TAGS: &[&str] = &["script", "style", "noscript", "template", "canvas", "svg"];

static CONVERTER: LazyLock<HtmlToMarkdown> = LazyLock::new(|| build_converter(false));
static CONVERTER_WITH_IMAGES: LazyLock<HtmlToMarkdown> = LazyLock::new(|| build_converter(true));

/// Render HTML to Markdown with the pipeline's rule set.
///
/// # Errors
///
/// Returns `Error::Render` if the engine rejects the document; the caller
/// (the top-level orchestration) falls back to the original input.
pub fn render(html: &str, options: &Options) -> Result<String> {
    let converter = if options.include_images {
        &*CONVERTER_WITH_IMAGES
    } else {
        &*CONVERTER
    };
    converter
        .convert(html)
        .map_err(|err| Error::Render(err.to_string()))
}

fn build_converter(include_images: bool) -> HtmlToMarkdown {
    let mut builder = HtmlToMarkdown::builder()
        .skip_tags(SUPPRESSED_TAGS.to_vec())
        .options(htmd::options::Options {
            heading_style: HeadingStyle::Atx,
            code_block_style: CodeBlockStyle::Fenced,
            code_block_fence: CodeBlockFence::Backticks,
            bullet_list_marker: BulletListMarker::Dash,
            ..htmd::options::Options::default()
        })
        .add_handler(vec!["br"], br_handler)
        .add_handler(vec!["a"], anchor_handler);
    if !include_images {
        builder = builder.add_handler(vec!["img"], img_handler);
    }
    builder.build()
}

/// A forced break becomes a single newline, not the blank line a generic
/// renderer would emit for it. Simple line wraps must not read as paragraph
/// boundaries downstream.
fn br_handler(_handlers: &dyn Handlers, _element: Element) -> Option<HandlerResult> {
    Some(HandlerResult::from("\n".to_string()))
}

/// Every image renders to the empty string. This removes inline images and
/// subsumes tracking-pixel removal without any dimension check.
fn img_handler(_handlers: &dyn Handlers, _element: Element) -> Option<HandlerResult> {
    Some(HandlerResult::from(String::new()))
}

/// Link simplification.
///
/// When the rendered inner text already spells out the destination (with or
/// without its `http(s)://` prefix), the bracket syntax is redundant token
/// overhead; the bare URL is emitted instead and downstream Markdown
/// consumers auto-link it. Otherwise standard `[text](url)` with no title.
/// Anchors without a destination render as their text alone; anchors with a
/// destination but no rendered text render to nothing.
fn anchor_handler(handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    let text = handlers.walk_children(element.node).content;
    let text = text.trim();

    let Some(href) = attr_value(element.attrs, "href") else {
        return Some(HandlerResult::from(text.to_string()));
    };
    if text.is_empty() {
        return Some(HandlerResult::from(String::new()));
    }

    let text_is_destination = text == href
        || Some(text) == href.strip_prefix("http://")
        || Some(text) == href.strip_prefix("https://");
    if text_is_destination {
        Some(HandlerResult::from(href))
    } else {
        Some(HandlerResult::from(format!("[{text}]({href})")))
    }
}

fn attr_value(attrs: &[html5ever::Attribute], name: &str) -> Option<String> {
    attrs
        .iter()
        .find(|a| &*a.name.local == name)
        .map(|a| a.value.to_string())
        .filter(|v| !v.is_empty())
}
