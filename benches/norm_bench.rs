// Criterion benchmark suite for the normalization pipeline.
//
// Run: cargo bench
// Specific group: cargo bench -- nfc
// HTML report: target/criterion/report/index.html

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ferrune::normalize::{nfc, nfd, nfkc, nfkc_casefold};

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

fn inputs() -> Vec<(&'static str, String)> {
    vec![
        ("ascii", "the quick brown fox jumps over the lazy dog. ".repeat(32)),
        (
            "latin-precomposed",
            "caf\u{E9} cr\u{E8}me br\u{FB}l\u{E9}e \u{E0} volont\u{E9}. ".repeat(32),
        ),
        (
            "latin-decomposed",
            "cafe\u{301} cre\u{300}me bru\u{302}le\u{301}e a\u{300} volonte\u{301}. "
                .repeat(32),
        ),
        ("hangul-jamo", "\u{1112}\u{1161}\u{11AB}\u{1100}\u{1173}\u{11AF}".repeat(64)),
        ("hangul-syllables", "\u{D55C}\u{AD6D}\u{C5B4} \u{BB38}\u{C7A5}".repeat(64)),
        (
            "mixed-marks",
            "q\u{0307}\u{0323}s\u{0323}\u{0307}x\u{0305}\u{0301} ".repeat(64),
        ),
        ("emoji", "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}\u{1F1FA}\u{1F1F8}".repeat(32)),
    ]
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_forms(c: &mut Criterion) {
    for (name, text) in inputs() {
        let bytes = text.as_bytes();
        let mut group = c.benchmark_group(name);
        group.bench_with_input(BenchmarkId::new("nfc", bytes.len()), bytes, |b, s| {
            b.iter(|| nfc(black_box(s)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("nfd", bytes.len()), bytes, |b, s| {
            b.iter(|| nfd(black_box(s)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("nfkc", bytes.len()), bytes, |b, s| {
            b.iter(|| nfkc(black_box(s)).unwrap())
        });
        group.bench_with_input(
            BenchmarkId::new("nfkc_casefold", bytes.len()),
            bytes,
            |b, s| b.iter(|| nfkc_casefold(black_box(s)).unwrap()),
        );
        group.finish();
    }
}

fn bench_graphemes(c: &mut Criterion) {
    let text = "he\u{301}llo \u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466} \u{D55C}\u{AD6D}\u{C5B4} \u{1F1FA}\u{1F1F8}".repeat(64);
    c.bench_function("graphemes/count", |b| {
        b.iter(|| ferrune::api::graphemes(black_box(text.as_str())).count())
    });
}

criterion_group!(benches, bench_forms, bench_graphemes);
criterion_main!(benches);
