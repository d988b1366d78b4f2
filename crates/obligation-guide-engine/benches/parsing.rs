use criterion::{Criterion, criterion_group, criterion_main};
use obligation_guide_engine::markup::{ParseCache, ReferenceList, parse, parse_inline};
mod common;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let refs = ReferenceList::default();
    let content = common::generate_authored_text(100);

    group.bench_function("parse_document", |b| {
        b.iter(|| {
            let nodes = parse(std::hint::black_box(&content), &refs);
            std::hint::black_box(nodes);
        });
    });

    group.bench_function("parse_inline_only", |b| {
        b.iter(|| {
            let nodes = parse_inline(std::hint::black_box(&content), &refs);
            std::hint::black_box(nodes);
        });
    });

    group.bench_function("parse_cached", |b| {
        let mut cache = ParseCache::new(refs.clone());
        b.iter(|| {
            let nodes = cache.parse(std::hint::black_box(&content)).len();
            std::hint::black_box(nodes);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
