//! Performance benchmarks for lettermark.
//!
//! Run with: `cargo bench`
//!
//! Covers a typical marketing-style email body plus the two degenerate
//! shapes the normalizer exists for: pathological space runs and
//! invisible-character spam.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lettermark::{transform, transform_with_options, Options};

const SAMPLE_EMAIL: &str = r#"
<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <style>.preheader { display: none; }</style>
</head>
<body>
    <div class="preheader">Your weekly digest is here</div>
    <h1>Weekly Digest</h1>
    <img src="https://tr.example.com/open?id=8234" width="1" height="1">
    <p>Hi there,<br>here is what happened this week.</p>
    <h2>Highlights</h2>
    <ul>
        <li><a href="https://news.example.com/a/1">Release 2.4 shipped</a></li>
        <li><a href="https://news.example.com/a/2">New dashboard beta</a></li>
    </ul>
    <p>Watch the recap:</p>
    <iframe src="https://player.example.com/embed/931" width="560" height="315"></iframe>
    <p>Read more at
    <a href="https://nam06.safelinks.protection.outlook.com/?url=https%3A%2F%2Fblog.example.com%2Frecap&amp;data=05%7C01">
    the blog</a>.</p>
    <footer>
        <p>You are receiving this because you subscribed.&nbsp;&nbsp;
        <a href="https://example.com/unsubscribe">Unsubscribe</a></p>
    </footer>
</body>
</html>
"#;

fn bench_transform_default(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    group.throughput(Throughput::Bytes(SAMPLE_EMAIL.len() as u64));
    group.bench_function("sample_email", |b| {
        b.iter(|| transform(black_box(SAMPLE_EMAIL)));
    });
    group.finish();
}

fn bench_transform_with_images(c: &mut Criterion) {
    let options = Options {
        include_images: true,
        ..Options::default()
    };

    c.bench_function("transform_with_images", |b| {
        b.iter(|| transform_with_options(black_box(SAMPLE_EMAIL), black_box(&options)));
    });
}

fn bench_pathological_whitespace(c: &mut Criterion) {
    let signature_junk = format!(
        "<p>Before</p><p>{}{}</p><p>After</p>",
        "&nbsp;".repeat(300),
        "\u{2003}".repeat(300),
    );
    let zero_width_spam = format!("<p>{}</p>", "a\u{200B}\u{200D}".repeat(500));

    let mut group = c.benchmark_group("degenerate");
    group.bench_function("space_runs", |b| {
        b.iter(|| transform(black_box(&signature_junk)));
    });
    group.bench_function("invisible_chars", |b| {
        b.iter(|| transform(black_box(&zero_width_spam)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_transform_default,
    bench_transform_with_images,
    bench_pathological_whitespace
);
criterion_main!(benches);
