use std::collections::HashSet;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use avl_tree::Tree;

const N: usize = 100_000;
const COMPARE_N: usize = 10_000;

fn unique_values(rng: &mut StdRng, len: usize) -> Vec<i32> {
    let upper = (len * 10) as i32;
    let mut seen = HashSet::with_capacity(len);
    let mut values = Vec::with_capacity(len);
    while values.len() < len {
        let value = rng.gen_range(0..upper);
        if seen.insert(value) {
            values.push(value);
        }
    }
    values
}

pub fn benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let values = unique_values(&mut rng, N);

    c.bench_function("tree_add", |b| {
        b.iter(|| {
            let mut tree = Tree::new();
            for value in &values {
                let _ = tree.add(*value);
            }
            tree
        })
    });

    let mut tree = Tree::new();
    for value in &values {
        let _ = tree.add(*value);
    }

    c.bench_function("tree_search", |b| {
        b.iter(|| {
            for value in &values {
                black_box(tree.search(value));
            }
        })
    });

    c.bench_function("tree_in_order", |b| b.iter(|| black_box(tree.in_order())));

    c.bench_function("tree_remove", |b| {
        b.iter(|| {
            let mut tree = tree.clone();
            for value in &values {
                tree.remove(value);
            }
            tree
        })
    });
}

// Add, search, then remove every value, against the containers an
// AVL tree is usually weighed against.
pub fn comparisons(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let values = unique_values(&mut rng, COMPARE_N);
    let mut group = c.benchmark_group("add_search_remove");

    group.bench_with_input(BenchmarkId::new("avl_tree", COMPARE_N), &values, |b, values| {
        b.iter(|| {
            let mut tree = Tree::new();
            for value in values {
                let _ = tree.add(*value);
            }
            for value in values {
                black_box(tree.search(value));
            }
            for value in values {
                tree.remove(value);
            }
        })
    });

    group.bench_with_input(BenchmarkId::new("vec_linear", COMPARE_N), &values, |b, values| {
        b.iter(|| {
            let mut vec = Vec::new();
            for value in values {
                vec.push(*value);
            }
            for value in values {
                black_box(vec.contains(value));
            }
            for value in values {
                if let Some(index) = vec.iter().position(|v| v == value) {
                    vec.remove(index);
                }
            }
        })
    });

    group.bench_with_input(BenchmarkId::new("hash_set", COMPARE_N), &values, |b, values| {
        b.iter(|| {
            let mut set = HashSet::new();
            for value in values {
                set.insert(*value);
            }
            for value in values {
                black_box(set.contains(value));
            }
            for value in values {
                set.remove(value);
            }
        })
    });

    group.finish();
}

criterion_group!(benches, benchmarks, comparisons);
criterion_main!(benches);
