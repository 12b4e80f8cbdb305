//! Criterion micro-benchmarks for enqueue, dequeue and removal by identity.
//!
//! `VecDeque` with a linear scan is included as the baseline for removal,
//! since that is what the identity lookup table replaces.

use std::collections::VecDeque;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use slotline_arena::IndexedQueue;
use slotline_bench::{churn_workload, filled_queue, run_workload};
use slotline_core::Identity;
use slotline_test_utils::{demo_config, demo_subjects};

const SIZES: [u32; 3] = [64, 1_024, 16_384];

fn bench_enqueue_dequeue_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("enqueue_dequeue_cycle");
    for capacity in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &capacity, |b, &cap| {
            let mut q = IndexedQueue::new(cap).unwrap();
            b.iter(|| {
                for id in 0..cap {
                    let _ = q.enqueue(Identity(id));
                }
                while let Some(id) = q.dequeue() {
                    black_box(id);
                }
            });
        });
    }
    group.finish();
}

fn bench_remove_middle(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_middle");
    for capacity in SIZES {
        group.bench_with_input(
            BenchmarkId::new("indexed_queue", capacity),
            &capacity,
            |b, &cap| {
                b.iter_batched_ref(
                    || filled_queue(cap),
                    |q| black_box(q.remove_identity(Identity(cap / 2))),
                    BatchSize::SmallInput,
                );
            },
        );
        group.bench_with_input(
            BenchmarkId::new("vecdeque_scan", capacity),
            &capacity,
            |b, &cap| {
                b.iter_batched_ref(
                    || (0..cap).map(Identity).collect::<VecDeque<_>>(),
                    |q| {
                        let target = Identity(cap / 2);
                        let pos = q.iter().position(|&id| id == target);
                        black_box(pos.and_then(|p| q.remove(p)))
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    let ops = churn_workload(10_000, 1_024, 42);
    c.bench_function("churn_10k_ops_1k_slots", |b| {
        let mut q = IndexedQueue::new(1_024).unwrap();
        b.iter(|| {
            q.clear();
            black_box(run_workload(&mut q, &ops))
        });
    });
}

fn bench_demo_payload(c: &mut Criterion) {
    c.bench_function("demo_subjects_round_trip", |b| {
        let mut q = IndexedQueue::with_config(demo_config()).unwrap();
        b.iter(|| {
            for s in demo_subjects() {
                let _ = q.enqueue(s);
            }
            while let Some(s) = q.dequeue() {
                black_box(s);
            }
        });
    });
}

criterion_group!(
    benches,
    bench_enqueue_dequeue_cycle,
    bench_remove_middle,
    bench_churn,
    bench_demo_payload
);
criterion_main!(benches);
