use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

/// A synthetic document exercising every construct.
fn document() -> String {
    let section = "== Section ==\n\
        Some **bold** and //italic// text with a [[Page|link]] and\n\
        a bare http://example.com/path?q=1 url.\\\\Forced break.\n\
        \n\
        * one\n\
        ** one.one\n\
        * two\n\
        \n\
        |=name|=size|\n\
        |a|1|\n\
        |b|2|\n\
        \n\
        {{{\n\
        no //markup// in here\n\
        }}}\n\
        \n\
        ----\n\
        \n";

    section.repeat(100)
}

fn transform(c: &mut Criterion) {
    let doc = document();

    c.bench_with_input(BenchmarkId::new("to_html", "synthetic"), &doc, |b, s| {
        b.iter(|| creole::to_html(s));
    });
}

criterion_group!(benches, transform);
criterion_main!(benches);
