use criterion::{black_box, criterion_group, criterion_main, Criterion};
use whatwg_url::{idna, pct_enc, Url};

criterion_group!(
    benches,
    bench_parse,
    bench_parse_url,
    bench_parse_idn,
    bench_parse_idn_url,
    bench_resolve,
    bench_resolve_url,
    bench_serialize,
    bench_to_ascii,
    bench_encode,
    bench_decode,
);
criterion_main!(benches);

const PARSE_CASE: &str = "https://user@example.com/search?q=%E6%B5%8B%E8%AF%95#fragment";
const IDN_CASE: &str = "http://B\u{fc}cher.\u{65e5}\u{672c}\u{8a9e}.jp/./a/../b";
const RESOLVE_CASE_BASE: &str = "http://example.com/foo/bar";
const RESOLVE_CASE_REF: &str = "../baz";

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse", |b| b.iter(|| Url::parse(black_box(PARSE_CASE))));
}

fn bench_parse_url(c: &mut Criterion) {
    c.bench_function("parse_url", |b| {
        b.iter(|| url::Url::parse(black_box(PARSE_CASE)))
    });
}

fn bench_parse_idn(c: &mut Criterion) {
    c.bench_function("parse_idn", |b| b.iter(|| Url::parse(black_box(IDN_CASE))));
}

fn bench_parse_idn_url(c: &mut Criterion) {
    c.bench_function("parse_idn_url", |b| {
        b.iter(|| url::Url::parse(black_box(IDN_CASE)))
    });
}

fn bench_resolve(c: &mut Criterion) {
    let base = Url::parse(RESOLVE_CASE_BASE).unwrap();
    c.bench_function("resolve", |b| {
        b.iter(|| base.join(black_box(RESOLVE_CASE_REF)))
    });
}

fn bench_resolve_url(c: &mut Criterion) {
    let base = url::Url::parse(RESOLVE_CASE_BASE).unwrap();
    c.bench_function("resolve_url", |b| {
        b.iter(|| base.join(black_box(RESOLVE_CASE_REF)))
    });
}

fn bench_serialize(c: &mut Criterion) {
    let url = Url::parse(PARSE_CASE).unwrap();
    c.bench_function("serialize", |b| b.iter(|| black_box(&url).href()));
}

fn bench_to_ascii(c: &mut Criterion) {
    c.bench_function("to_ascii", |b| {
        b.iter(|| idna::to_ascii(black_box("B\u{fc}cher.\u{65e5}\u{672c}\u{8a9e}.jp")))
    });
}

fn bench_encode(c: &mut Criterion) {
    c.bench_function("encode", |b| {
        b.iter(|| pct_enc::encode(black_box("a b\u{6d4b}\u{8bd5}?x=\"y\""), pct_enc::table::PATH))
    });
}

fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode", |b| {
        b.iter(|| pct_enc::decode(black_box(b"q=%E6%B5%8B%E8%AF%95&r=%zz")))
    });
}
