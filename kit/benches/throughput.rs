use divan::{Bencher, black_box};
use jsonic::{Dialect, ParseConfig, TrailingPolicy, default_dialect, factory, from_reader, from_str};

fn main() {
    divan::main();
}

const SAMPLE_OBJECTS: &[&str] = &[
    r#"{"id": 1, "name": "Alice", "active": true}"#,
    r#"{"id": 2, "name": "Bob", "active": false, "score": 95.5}"#,
    r#"{"id": 3, "name": "Charlie", "tags": ["rust", "parser", "benchmark"]}"#,
    r#"{"user": {"name": "Dave", "email": "dave@example.com"}, "timestamp": 1699900000}"#,
];

/// A single array document holding `count` sample objects.
fn generate_document(count: usize) -> String {
    let mut result = String::with_capacity(count * 100 + 2);
    result.push('[');
    for i in 0..count {
        if i > 0 {
            result.push_str(",\n");
        }
        result.push_str(SAMPLE_OBJECTS[i % SAMPLE_OBJECTS.len()]);
    }
    result.push(']');
    result
}

/// `depth` nested arrays around a single number.
fn generate_nested(depth: usize) -> String {
    format!("{}0{}", "[".repeat(depth), "]".repeat(depth))
}

#[divan::bench(
    name = "parse_str",
    args = [100, 1000, 10_000, 100_000],
)]
fn bench_parse_str(bencher: Bencher, n: usize) {
    let input = generate_document(n);
    let dialect = default_dialect();

    bencher
        .counter(divan::counter::BytesCount::new(input.len()))
        .bench(|| black_box(from_str(&dialect, &input).unwrap()));
}

#[divan::bench(
    name = "parse_reader",
    args = [100, 1000, 10_000, 100_000],
)]
fn bench_parse_reader(bencher: Bencher, n: usize) {
    let input = generate_document(n);
    let dialect = default_dialect();

    bencher
        .counter(divan::counter::BytesCount::new(input.len()))
        .bench(|| black_box(from_reader(&dialect, input.as_bytes(), ParseConfig::DEFAULT).unwrap()));
}

#[divan::bench(
    name = "strict_lenient_dialect",
    args = [100, 1000, 10_000],
)]
fn bench_strict_lenient(bencher: Bencher, n: usize) {
    let input = generate_document(n);
    let dialect = Dialect::new()
        .with_strict_keys(true)
        .with_trailing(TrailingPolicy::Optional)
        .build();

    bencher
        .counter(divan::counter::BytesCount::new(input.len()))
        .bench(|| black_box(from_str(&dialect, &input).unwrap()));
}

#[divan::bench(
    name = "string_array",
    args = [100, 1000, 10_000, 100_000],
)]
fn bench_string_array(bencher: Bencher, n: usize) {
    let items: Vec<String> = (0..n).map(|i| format!("\"item \\\"{i}\\\"\"")).collect();
    let input = format!("[{}]", items.join(", "));
    let parser = factory::string_array();

    bencher
        .counter(divan::counter::BytesCount::new(input.len()))
        .bench(|| black_box(from_str(&parser, &input).unwrap()));
}

#[divan::bench(
    name = "nesting",
    args = [8, 32, 128],
)]
fn bench_nesting(bencher: Bencher, depth: usize) {
    let input = generate_nested(depth);
    let dialect = default_dialect();

    bencher.bench(|| black_box(from_str(&dialect, &input).unwrap()));
}
