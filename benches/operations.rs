use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fluent_collection::{Collection, CollectionOptions, Value};
use serde::Serialize;

#[derive(Serialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

fn numbers(size: usize) -> Collection {
    (0..size as i64).map(Value::from).collect()
}

fn products(size: usize) -> Vec<Product> {
    (0..size)
        .map(|i| Product {
            sku: format!("SKU-{:04}", i),
            name: format!("Product {}", i),
            price: 9.99 + i as f64,
            quantity: (i % 7) as u32,
        })
        .collect()
}

fn benchmark_from_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_serialize");

    for size in [10, 100, 1000].iter() {
        let data = products(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| Collection::from_serialize(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_avg(c: &mut Criterion) {
    let collection = Collection::from_serialize(&products(1000)).unwrap();

    c.bench_function("avg_by_price", |b| {
        b.iter(|| black_box(&collection).avg_by("price"))
    });
}

fn benchmark_chunk(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk");

    for size in [100, 1000, 10000].iter() {
        let collection = numbers(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &collection, |b, col| {
            b.iter(|| col.chunk(black_box(16)))
        });
    }

    group.finish();
}

fn benchmark_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff");

    for size in [10, 100, 500].iter() {
        let left = numbers(*size);
        let right = numbers(*size / 2);
        let strict = left.clone().with_options(CollectionOptions::strict());

        group.bench_with_input(BenchmarkId::new("loose", size), &right, |b, right| {
            b.iter(|| left.diff(black_box(right)))
        });
        group.bench_with_input(BenchmarkId::new("strict", size), &right, |b, right| {
            b.iter(|| strict.diff(black_box(right)))
        });
        group.bench_with_input(BenchmarkId::new("keys", size), &right, |b, right| {
            b.iter(|| left.diff_keys(black_box(right)))
        });
    }

    group.finish();
}

fn benchmark_dot(c: &mut Criterion) {
    let collection = Collection::from_serialize(&products(500)).unwrap();

    c.bench_function("dot_nested", |b| b.iter(|| black_box(&collection).dot()));
}

fn benchmark_count_by(c: &mut Criterion) {
    let collection: Collection = (0..1000i64).map(|i| Value::from(i % 13)).collect();

    c.bench_function("count_by", |b| {
        b.iter(|| black_box(&collection).count_by())
    });
}

criterion_group!(
    benches,
    benchmark_from_serialize,
    benchmark_avg,
    benchmark_chunk,
    benchmark_diff,
    benchmark_dot,
    benchmark_count_by
);
criterion_main!(benches);
