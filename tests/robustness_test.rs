//! The transform must never panic and never lose the caller's input:
//! malformed markup either renders best-effort or passes through unchanged.

use lettermark::transform;
use std::time::{Duration, Instant};

#[test]
fn does_not_panic_on_unclosed_tags() {
    let md = transform("<p>text<div>more");
    assert!(md.contains("text"));
    assert!(md.contains("more"));
}

#[test]
fn does_not_panic_on_invalid_nesting() {
    let md = transform("<p><div>inner</p></div>");
    assert!(md.contains("inner"));
}

#[test]
fn does_not_panic_on_broken_attributes() {
    let _md = transform("<div class=\"test id=broken>dangling");
}

#[test]
fn does_not_panic_on_incomplete_entities() {
    let md = transform("<p>&amp text &unknown; more</p>");
    assert!(md.contains("text"));
    assert!(md.contains("more"));
}

#[test]
fn does_not_panic_on_null_bytes() {
    let md = transform("<p>text\u{0}more</p>");
    assert!(md.contains("text"));
}

#[test]
fn does_not_panic_on_lone_angle_brackets() {
    let _md = transform("< p >< >>");
}

#[test]
fn whitespace_only_input_produces_empty_output() {
    assert_eq!(transform("   \n\t  "), "");
}

#[test]
fn script_content_never_reaches_the_output() {
    let html = r#"<script>var token = "secret";</script><p>Safe content</p>"#;
    let md = transform(html);
    assert!(!md.contains("secret"));
    assert!(md.contains("Safe content"));
}

#[test]
fn style_content_never_reaches_the_output() {
    let html = "<style>p { display: none }</style><p>Visible</p>";
    let md = transform(html);
    assert!(!md.contains("display"));
    assert!(md.contains("Visible"));
}

#[test]
fn handles_deeply_nested_markup() {
    let mut html = String::new();
    for _ in 0..100 {
        html.push_str("<div>");
    }
    html.push_str("<p>core</p>");
    for _ in 0..100 {
        html.push_str("</div>");
    }
    assert!(transform(&html).contains("core"));
}

#[test]
fn handles_large_input_in_reasonable_time() {
    let target_size = 2 * 1024 * 1024;
    let chunk = "<p>Some repeated email body content for stress testing.</p>";
    let mut html = String::with_capacity(target_size + 128);
    while html.len() < target_size {
        html.push_str(chunk);
    }

    let start = Instant::now();
    let md = transform(&html);
    let elapsed = start.elapsed();

    assert!(md.contains("stress testing"));
    assert!(elapsed < Duration::from_secs(60), "transform took {elapsed:?}");
}

#[test]
fn handles_many_media_elements() {
    let mut html = String::new();
    for i in 0..500 {
        html.push_str(&format!(r#"<iframe src="https://v.example/{i}"></iframe>"#));
    }
    let md = transform(&html);
    assert!(md.contains("https://v.example/0"));
    assert!(md.contains("https://v.example/499"));
}
