//! Benchmarks for traversal and the full pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use melflow::config::TraversalConfig;
use melflow::pipeline::{MelPipeline, RunRequest};
use melflow::testing::chain_record;
use melflow::traversal::{traverse, TraversalMode};

fn traversal_benchmark(c: &mut Criterion) {
    let record = chain_record(5_000, 30);
    let config = TraversalConfig::default();

    c.bench_function("traverse_chain_5000", |b| {
        b.iter(|| traverse(black_box(&record), &TraversalMode::WholeDocument, &config))
    });
}

fn pipeline_benchmark(c: &mut Criterion) {
    let record = chain_record(1_000, 30);
    let pipeline = MelPipeline::default();
    let request = RunRequest::whole_document().with_title("Bench");

    c.bench_function("pipeline_chain_1000", |b| {
        b.iter(|| pipeline.run(black_box(&record), &request))
    });
}

criterion_group!(benches, traversal_benchmark, pipeline_benchmark);
criterion_main!(benches);
