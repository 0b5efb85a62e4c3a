//! Benchmarks for the recommendation resolver
//!
//! Run with: cargo bench --package pipeline

use catalog::{Catalog, Mood};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pipeline::Resolver;
use std::sync::Arc;

fn bench_recommend(c: &mut Criterion) {
    let resolver = Resolver::new(Arc::new(Catalog::builtin()));

    c.bench_function("resolver_recommend", |b| {
        b.iter(|| {
            let movies = resolver.recommend(black_box(Mood::Relaxed), None).unwrap();
            black_box(movies)
        })
    });
}

fn bench_recommend_with_fallback(c: &mut Criterion) {
    let resolver = Resolver::new(Arc::new(Catalog::builtin()));

    c.bench_function("resolver_recommend_fallback", |b| {
        b.iter(|| {
            let movies = resolver
                .recommend(black_box(Mood::Calm), black_box(Some("Western")))
                .unwrap();
            black_box(movies)
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let resolver = Resolver::new(Arc::new(Catalog::builtin()));

    c.bench_function("resolver_search", |b| {
        b.iter(|| {
            let movies = resolver.search(black_box("comedy")).unwrap();
            black_box(movies)
        })
    });
}

criterion_group!(
    benches,
    bench_recommend,
    bench_recommend_with_fallback,
    bench_search
);
criterion_main!(benches);
