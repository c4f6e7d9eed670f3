use avl_collections::avl_tree::{AvlSet, TraversalOrder};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 100;

fn keys() -> Vec<u32> {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    (0..NUM_OF_OPERATIONS).map(|_| rng.next_u32()).collect()
}

fn bench_btreeset_insert(c: &mut Criterion) {
    let keys = keys();
    c.bench_function("bench btreeset insert", move |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for key in &keys {
                set.insert(*key);
            }
            set
        })
    });
}

fn bench_btreeset_contains(c: &mut Criterion) {
    let keys = keys();
    let set: BTreeSet<u32> = keys.iter().cloned().collect();
    c.bench_function("bench btreeset contains", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(set.contains(key));
            }
        })
    });
}

fn bench_avl_set_insert(c: &mut Criterion) {
    let keys = keys();
    c.bench_function("bench avl_set insert", move |b| {
        b.iter(|| {
            let mut set = AvlSet::new();
            for key in &keys {
                set.insert(*key);
            }
            set
        })
    });
}

fn bench_avl_set_contains(c: &mut Criterion) {
    let keys = keys();
    let set: AvlSet<u32> = keys.iter().cloned().collect();
    c.bench_function("bench avl_set contains", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(set.contains(key));
            }
        })
    });
}

fn bench_avl_set_remove(c: &mut Criterion) {
    let keys = keys();
    let set: AvlSet<u32> = keys.iter().cloned().collect();
    c.bench_function("bench avl_set remove", move |b| {
        b.iter(|| {
            let mut set = set.clone();
            for key in &keys {
                black_box(set.remove(key));
            }
        })
    });
}

fn bench_avl_set_traverse(c: &mut Criterion) {
    let set: AvlSet<u32> = keys().into_iter().collect();
    c.bench_function("bench avl_set post-order traversal", move |b| {
        b.iter(|| black_box(set.traverse(TraversalOrder::PostOrder).count()))
    });
}

criterion_group!(
    benches,
    bench_btreeset_insert,
    bench_btreeset_contains,
    bench_avl_set_insert,
    bench_avl_set_contains,
    bench_avl_set_remove,
    bench_avl_set_traverse,
);
criterion_main!(benches);
