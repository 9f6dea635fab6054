//! Rewrite benchmarks.
//!
//! Measures identity passes (no allocation expected) against passes that
//! replace a fraction of the leaves and rebuild their ancestors.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use std::sync::Arc;
use tsr::factory::{create_identifier, create_parenthesized_expression};
use tsr::{Identity, NodeRef, Rewriter};

const PROGRAM_SIZES: [usize; 3] = [10, 100, 1_000];

fn bench_identity(c: &mut Criterion) {
    let mut group = c.benchmark_group("identity");
    for size in PROGRAM_SIZES {
        let program = tsr::ast::samples::sample_program(size);
        group.throughput(Throughput::Elements(program.count_nodes() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &program, |b, program| {
            b.iter(|| {
                let result = Rewriter::new().fallback(black_box(program), &mut Identity, &mut ());
                assert!(Arc::ptr_eq(&result, program));
                result
            });
        });
    }
    group.finish();
}

fn bench_rename(c: &mut Criterion) {
    let mut group = c.benchmark_group("rename_identifier");
    for size in PROGRAM_SIZES {
        let program = tsr::ast::samples::sample_program(size);
        group.throughput(Throughput::Elements(program.count_nodes() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &program, |b, program| {
            b.iter(|| {
                let mut rename = |node: &NodeRef, _: &mut ()| {
                    if node.text() == Some("log") {
                        return Some(create_identifier("trace", Some(node.loc), None));
                    }
                    Some(Arc::clone(node))
                };
                Rewriter::new().fallback(black_box(program), &mut rename, &mut ())
            });
        });
    }
    group.finish();
}

fn bench_deep_nesting(c: &mut Criterion) {
    let mut node = create_identifier("x", None, None);
    for _ in 0..400 {
        node = create_parenthesized_expression(node, None, None);
    }
    c.bench_function("deep_parentheses_400", |b| {
        b.iter(|| Rewriter::new().fallback(black_box(&node), &mut Identity, &mut ()));
    });
}

criterion_group!(benches, bench_identity, bench_rename, bench_deep_nesting);
criterion_main!(benches);
