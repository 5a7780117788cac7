use criterion::{criterion_group, criterion_main, Criterion};
use rootsum::{Engine, PipelineConfig};
use rootsum_core::types::{Column, RowBatch, Scalar};
use rootsum_operators::{Filter, Operator};

fn make_batch(rows: usize) -> RowBatch {
    RowBatch::new(vec![Column::new(
        "sqrt",
        (0..rows).map(|i| Scalar::F64((i % 10) as f64)).collect(),
    )])
}

fn bench_default_pipeline(c: &mut Criterion) {
    let engine = Engine::new(PipelineConfig::default()).unwrap();
    c.bench_function("pipeline_default", |b| {
        b.iter(|| {
            let _ = engine.run().unwrap();
        })
    });
}

fn bench_filter_operator(c: &mut Criterion) {
    let batch = make_batch(1024);
    let filter = Filter::new("sqrt > 2").unwrap();
    c.bench_function("filter_op", |b| {
        b.iter(|| {
            let _ = filter.eval_block(&[batch.clone()]).unwrap();
        })
    });
}

criterion_group!(pipeline, bench_default_pipeline, bench_filter_operator);
criterion_main!(pipeline);
