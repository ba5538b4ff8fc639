//! FILENAME: renderer/benches/render_tables.rs
//! PURPOSE: Render throughput over a moderately sized dataset.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use model::{PathSegment, TableData, TableStyle};
use renderer::render;

fn dataset(rows: usize, columns: usize) -> TableData {
    let mut data = TableData::new();
    for row in 0..rows {
        for column in 0..columns {
            data.record(
                &[
                    PathSegment::Index(row),
                    PathSegment::field(format!("col{}", column)),
                ],
                format!("value {}-{}", row, column),
            );
        }
    }
    data
}

fn bench_render(c: &mut Criterion) {
    let data = dataset(100, 10);
    let boxed = TableStyle::default();
    let whitespace = TableStyle::whitespace();

    c.bench_function("render_100x10_boxed", |b| {
        b.iter(|| render(black_box(&data), black_box(&boxed)))
    });
    c.bench_function("render_100x10_whitespace", |b| {
        b.iter(|| render(black_box(&data), black_box(&whitespace)))
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
