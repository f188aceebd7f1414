use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn make_records(rows: usize) -> String {
    let mut s = String::from("[");
    for i in 0..rows {
        if i > 0 {
            s.push_str(", ");
        }
        s.push_str(&format!(
            "{{\"id\": {i}, \"name\": \"row {i}\\n\", \"score\": {}.5, \"tags\": [\"a\", \"\\u00e9\"]}}",
            i % 100
        ));
    }
    s.push(']');
    s
}

fn make_lines(rows: usize) -> String {
    (0..rows).map(|i| format!("{{\"n\": {i}}}\n")).collect()
}

pub fn decode_benchmarks(c: &mut Criterion) {
    let cases = vec![
        ("small".to_string(), "{\"a\": 1, \"b\": [true, \"x\"]}".to_string()),
        ("records_1k".to_string(), make_records(1000)),
    ];
    let mut group = c.benchmark_group("decode_json_to_value");
    for (name, text) in &cases {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(name.as_str(), |b| {
            b.iter(|| black_box(purejson::decode(black_box(text.as_bytes())).unwrap()))
        });
    }

    let lines = make_lines(1000);
    group.throughput(Throughput::Bytes(lines.len() as u64));
    group.bench_function("values_1k_lines", |b| {
        b.iter(|| purejson::values(black_box(lines.as_bytes())).count())
    });
    group.finish();
}

criterion_group!(benches, decode_benchmarks);
criterion_main!(benches);
