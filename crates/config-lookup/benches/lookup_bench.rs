//! Criterion benchmarks for the read-parse-lookup path.
//!
//! Every lookup re-reads and re-parses `config.json`, so the cost grows with
//! the file size rather than with the number of calls.  These benchmarks show
//! that growth for a few document sizes.
//!
//! Run with:
//! ```bash
//! cargo bench --package config-lookup --bench lookup_bench
//! ```

use std::path::PathBuf;

use config_lookup::{ConfigLookup, CONFIG_FILE_NAME};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{Map, Value};
use uuid::Uuid;

// ── Fixture builders ──────────────────────────────────────────────────────────

/// Writes a `config.json` with `n` string keys (`KEY_0` .. `KEY_{n-1}`) into a
/// fresh temporary directory and returns the directory.
fn write_config_with_n_keys(n: usize) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("config_lookup_bench_{}", Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("create bench dir");

    let mut fields = Map::with_capacity(n);
    for i in 0..n {
        fields.insert(format!("KEY_{i}"), Value::String(format!("value-{i}")));
    }
    let text = Value::Object(fields).to_string();
    std::fs::write(dir.join(CONFIG_FILE_NAME), text).expect("write bench config");
    dir
}

// ── Benchmarks ────────────────────────────────────────────────────────────────

fn bench_lookup_present_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_present_key");

    for n in [10usize, 100, 1_000] {
        let dir = write_config_with_n_keys(n);
        let lookup = ConfigLookup::in_dir(&dir);
        let key = format!("KEY_{}", n / 2);

        group.bench_with_input(BenchmarkId::from_parameter(n), &key, |b, key| {
            b.iter(|| black_box(lookup.lookup(black_box(key))))
        });

        std::fs::remove_dir_all(&dir).ok();
    }

    group.finish();
}

fn bench_resolve_missing_file(c: &mut Criterion) {
    let dir = std::env::temp_dir().join(format!("config_lookup_bench_{}", Uuid::new_v4()));
    let lookup = ConfigLookup::in_dir(&dir);

    c.bench_function("resolve_missing_file", |b| {
        b.iter(|| black_box(lookup.resolve(black_box("API_KEY")).is_err()))
    });
}

criterion_group!(benches, bench_lookup_present_key, bench_resolve_missing_file);
criterion_main!(benches);
