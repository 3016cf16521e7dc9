use btree::BTree;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

const TREE_DEGREE: usize = 8;
const SEED: u64 = 42;

fn generate_keys(size: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..size).map(|_| rng.gen_range(0..size as i32 * 2)).collect()
}

fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion");
    group.sample_size(50);

    for size in [100, 1000, 10000].iter() {
        let keys = generate_keys(*size);

        group.bench_with_input(BenchmarkId::new("btree", size), size, |b, _| {
            b.iter(|| {
                let mut tree = BTree::new(TREE_DEGREE).unwrap();
                for &key in &keys {
                    tree.insert(black_box(key));
                }
                black_box(tree)
            })
        });

        group.bench_with_input(BenchmarkId::new("std_btreeset", size), size, |b, _| {
            b.iter(|| {
                let mut set = BTreeSet::new();
                for &key in &keys {
                    set.insert(black_box(key));
                }
                black_box(set)
            })
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for size in [1000, 10000].iter() {
        let keys = generate_keys(*size);
        let mut tree = BTree::new(TREE_DEGREE).unwrap();
        let mut set = BTreeSet::new();
        for &key in &keys {
            tree.insert(key);
            set.insert(key);
        }
        let probes: Vec<i32> = generate_keys(1000);

        group.bench_with_input(BenchmarkId::new("btree", size), size, |b, _| {
            b.iter(|| {
                for probe in &probes {
                    black_box(tree.contains(probe));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("std_btreeset", size), size, |b, _| {
            b.iter(|| {
                for probe in &probes {
                    black_box(set.contains(probe));
                }
            })
        });
    }
    group.finish();
}

fn bench_removal(c: &mut Criterion) {
    let mut group = c.benchmark_group("removal");
    group.sample_size(30);

    for size in [1000, 10000].iter() {
        let keys = generate_keys(*size);

        group.bench_with_input(BenchmarkId::new("btree", size), size, |b, _| {
            b.iter(|| {
                let mut tree = BTree::new(TREE_DEGREE).unwrap();
                for &key in &keys {
                    tree.insert(key);
                }
                for key in &keys {
                    black_box(tree.remove(key));
                }
                black_box(tree)
            })
        });

        group.bench_with_input(BenchmarkId::new("std_btreeset", size), size, |b, _| {
            b.iter(|| {
                let mut set = BTreeSet::new();
                for &key in &keys {
                    set.insert(key);
                }
                for key in &keys {
                    black_box(set.remove(key));
                }
                black_box(set)
            })
        });
    }
    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    let keys = generate_keys(10000);
    let mut tree = BTree::new(TREE_DEGREE).unwrap();
    let mut set = BTreeSet::new();
    for &key in &keys {
        tree.insert(key);
        set.insert(key);
    }

    group.bench_function("btree", |b| b.iter(|| black_box(tree.iter().count())));
    group.bench_function("std_btreeset", |b| b.iter(|| black_box(set.iter().count())));
    group.finish();
}

criterion_group!(
    benches,
    bench_insertion,
    bench_lookup,
    bench_removal,
    bench_iteration
);
criterion_main!(benches);
