use criterion::{Criterion, criterion_group, criterion_main};
use obligation_guide_engine::obligations::resolve;
mod common;

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution");

    let (table, modules) = common::generate_mapping(10_000);

    group.bench_function("exact_match", |b| {
        b.iter(|| {
            let hits = resolve(
                std::hint::black_box("30000100-1"),
                &table,
                &modules,
                "standard_obligations",
            );
            std::hint::black_box(hits);
        });
    });

    group.bench_function("generalize_to_miss", |b| {
        b.iter(|| {
            let hits = resolve(
                std::hint::black_box("18999999-9"),
                &table,
                &modules,
                "standard_obligations",
            );
            std::hint::black_box(hits);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
