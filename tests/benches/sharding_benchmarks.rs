//! # Test-Grouping Sharding Benchmarks
//!
//! Filtering cost per test decision and per suite.
//!
//! | Operation | Target |
//! |-----------|--------|
//! | `stable_hash` on a class name | < 1µs |
//! | `should_run` on a class identity | < 1µs |
//! | Filter 10k-test plan | < 10ms |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;
use tg_sharding::{
    stable_hash, AnnotationHashingStrategy, Filterable, GroupFilter, ShardConfig,
    ShardSelectionApi, TestIdentity, TestPlan,
};
use tg_tests::fixtures::{class_identities, synthetic_class_names};

fn bench_stable_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("stable-hash");
    let name = "com.example.checkout.payment.CreditCardAuthorizationTest";

    group.bench_function("class_name", |b| b.iter(|| black_box(stable_hash(black_box(name)))));
    group.finish();
}

fn bench_should_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("group-filter");
    let identity =
        TestIdentity::for_class("com.example.checkout.payment.CreditCardAuthorizationTest")
            .with_markers(["Slow"]);

    let identity_filter = GroupFilter::new(8, 3).unwrap();
    group.bench_function("identity_strategy", |b| {
        b.iter(|| black_box(identity_filter.should_run(black_box(&identity))))
    });

    let annotation = Arc::new(AnnotationHashingStrategy::new(["Fast", "Network", "Slow"]));
    let annotation_filter =
        GroupFilter::with_strategy(ShardConfig::new(4, 2).unwrap(), annotation);
    group.bench_function("annotation_strategy", |b| {
        b.iter(|| black_box(annotation_filter.should_run(black_box(&identity))))
    });

    group.finish();
}

fn bench_filter_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("test-plan");
    let filter = GroupFilter::new(16, 5).unwrap();

    for size in [1_000, 10_000] {
        let identities = class_identities(&synthetic_class_names(size, 1));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("filter", size), &identities, |b, ids| {
            b.iter(|| {
                let mut plan = TestPlan::new(ids.clone());
                black_box(plan.filter(&filter).is_ok())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_stable_hash, bench_should_run, bench_filter_plan);
criterion_main!(benches);
