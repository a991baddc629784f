use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dense_int_set::DenseSet;
use std::collections::{BTreeSet, HashSet};

/// Clustered data: multiple ranges with gaps, one of them negative
const CLUSTERS: [(i64, i64); 4] = [(-1_000, 0), (10_000, 11_000), (20_000, 21_000), (30_000, 31_000)];

fn clustered_keys() -> impl Iterator<Item = i64> {
    CLUSTERS.iter().flat_map(|&(start, end)| start..end)
}

/// Benchmark insert operation with clustered keys
fn bench_insert_clustered(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_clustered");

    group.bench_function("DenseSet", |b| {
        b.iter(|| {
            let mut set = DenseSet::new();
            for i in clustered_keys() {
                black_box(set.insert(i).ok());
            }
        });
    });

    group.bench_function("BTreeSet", |b| {
        b.iter(|| {
            let mut btree = BTreeSet::new();
            for i in clustered_keys() {
                black_box(btree.insert(i));
            }
        });
    });

    group.bench_function("HashSet", |b| {
        b.iter(|| {
            let mut hash = HashSet::new();
            for i in clustered_keys() {
                black_box(hash.insert(i));
            }
        });
    });

    group.finish();
}

/// Benchmark contains over clustered data, hits and gap misses
fn bench_contains_clustered(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains_clustered");

    let set: DenseSet = clustered_keys().collect();
    let btree: BTreeSet<i64> = clustered_keys().collect();
    let hash: HashSet<i64> = clustered_keys().collect();
    let probes: Vec<i64> = (-2_000..32_000).step_by(97).collect();

    group.bench_function("DenseSet", |b| {
        b.iter(|| probes.iter().filter(|&&n| set.contains(n)).count());
    });

    group.bench_function("BTreeSet", |b| {
        b.iter(|| probes.iter().filter(|&n| btree.contains(n)).count());
    });

    group.bench_function("HashSet", |b| {
        b.iter(|| probes.iter().filter(|&n| hash.contains(n)).count());
    });

    group.finish();
}

/// Benchmark successor lookups across cluster gaps
fn bench_successor(c: &mut Criterion) {
    let mut group = c.benchmark_group("successor");

    let set: DenseSet = clustered_keys().collect();
    let btree: BTreeSet<i64> = clustered_keys().collect();

    group.bench_function("DenseSet", |b| {
        b.iter(|| {
            for from in (-2_000..32_000).step_by(997) {
                black_box(set.find_next(from));
            }
        });
    });

    group.bench_function("BTreeSet", |b| {
        b.iter(|| {
            for from in (-2_000..32_000i64).step_by(997) {
                black_box(btree.range(from..).next());
            }
        });
    });

    group.finish();
}

/// Benchmark full iteration
fn bench_iter_full(c: &mut Criterion) {
    let mut group = c.benchmark_group("iter_full");

    for size in [1_000i64, 10_000, 100_000].iter() {
        let set: DenseSet = (0..*size).collect();
        let btree: BTreeSet<i64> = (0..*size).collect();

        group.bench_with_input(BenchmarkId::new("DenseSet", size), size, |b, _| {
            b.iter(|| set.iter().fold(0i64, |acc, n| acc.wrapping_add(n)));
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), size, |b, _| {
            b.iter(|| btree.iter().fold(0i64, |acc, &n| acc.wrapping_add(n)));
        });
    }

    group.finish();
}

/// Benchmark range iteration inside one cluster
fn bench_range_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_queries");

    let set: DenseSet = clustered_keys().collect();
    let btree: BTreeSet<i64> = clustered_keys().collect();

    group.bench_function("DenseSet", |b| {
        b.iter(|| set.range(10_250..10_750).count());
    });

    group.bench_function("BTreeSet", |b| {
        b.iter(|| btree.range(10_250..10_750).count());
    });

    group.finish();
}

/// Operand pairs: overlapping windows, nested windows, far-apart windows
fn algebra_pairs() -> Vec<(&'static str, Vec<i64>, Vec<i64>)> {
    vec![
        (
            "overlapping",
            (0..20_000).step_by(3).collect(),
            (10_000..30_000).step_by(5).collect(),
        ),
        (
            "nested",
            (0..40_000).step_by(2).collect(),
            (15_000..16_000).collect(),
        ),
        (
            "disjoint",
            (0..10_000).collect(),
            (500_000..510_000).collect(),
        ),
    ]
}

/// Benchmark the four copying set operations
fn bench_set_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_algebra");

    for (name, left, right) in algebra_pairs() {
        let (a, b_set) = (DenseSet::from(left.as_slice()), DenseSet::from(right.as_slice()));
        let (ba, bb): (BTreeSet<i64>, BTreeSet<i64>) =
            (left.iter().copied().collect(), right.iter().copied().collect());

        group.bench_with_input(BenchmarkId::new("DenseSet_union", name), &name, |b, _| {
            b.iter(|| black_box(a.union(&b_set)));
        });
        group.bench_with_input(BenchmarkId::new("BTreeSet_union", name), &name, |b, _| {
            b.iter(|| black_box(ba.union(&bb).copied().collect::<BTreeSet<i64>>()));
        });

        group.bench_with_input(BenchmarkId::new("DenseSet_intersection", name), &name, |b, _| {
            b.iter(|| black_box(a.intersection(&b_set)));
        });
        group.bench_with_input(BenchmarkId::new("BTreeSet_intersection", name), &name, |b, _| {
            b.iter(|| black_box(ba.intersection(&bb).copied().collect::<BTreeSet<i64>>()));
        });

        group.bench_with_input(BenchmarkId::new("DenseSet_difference", name), &name, |b, _| {
            b.iter(|| black_box(a.difference(&b_set)));
        });
        group.bench_with_input(BenchmarkId::new("BTreeSet_difference", name), &name, |b, _| {
            b.iter(|| black_box(ba.difference(&bb).copied().collect::<BTreeSet<i64>>()));
        });

        group.bench_with_input(BenchmarkId::new("DenseSet_symmetric", name), &name, |b, _| {
            b.iter(|| black_box(a.symmetric_difference(&b_set)));
        });
        group.bench_with_input(BenchmarkId::new("BTreeSet_symmetric", name), &name, |b, _| {
            b.iter(|| {
                black_box(ba.symmetric_difference(&bb).copied().collect::<BTreeSet<i64>>())
            });
        });
    }

    group.finish();
}

/// Benchmark in-place intersection, which only touches the overlap
fn bench_intersection_in_place(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersection_in_place");

    for (name, left, right) in algebra_pairs() {
        let (a, b_set) = (DenseSet::from(left.as_slice()), DenseSet::from(right.as_slice()));

        group.bench_with_input(BenchmarkId::new("DenseSet", name), &name, |b, _| {
            b.iter_batched(
                || a.clone(),
                |mut acc| {
                    acc &= &b_set;
                    black_box(acc)
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark equality with slack words on one side
fn bench_equality(c: &mut Criterion) {
    let mut group = c.benchmark_group("equality");

    let fresh: DenseSet = clustered_keys().collect();
    let mut slack = fresh.clone();
    for far in [-100_000i64, 200_000] {
        if slack.insert(far).is_ok() {
            slack.remove(far);
        }
    }

    group.bench_function("DenseSet_same_layout", |b| {
        let other = fresh.clone();
        b.iter(|| black_box(fresh == other));
    });

    group.bench_function("DenseSet_with_slack", |b| {
        b.iter(|| black_box(fresh == slack));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_clustered,
    bench_contains_clustered,
    bench_successor,
    bench_iter_full,
    bench_range_queries,
    bench_set_algebra,
    bench_intersection_in_place,
    bench_equality,
);
criterion_main!(benches);
