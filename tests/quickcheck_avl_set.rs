mod common;

use avl_collections::avl_tree::AvlSet;
use common::assert_avl;
use quickcheck::{quickcheck, Arbitrary, Gen};
use std::collections::BTreeSet;

/// A single mutation applied to both the set under test and the reference set.
#[derive(Clone, Debug)]
enum Op<K> {
    Insert(K),
    Remove(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(K::arbitrary(g))
        } else {
            Op::Remove(K::arbitrary(g))
        }
    }
}

fn apply(ops: &[Op<i8>]) -> (AvlSet<i8>, BTreeSet<i8>) {
    let mut set = AvlSet::new();
    let mut expected = BTreeSet::new();
    for op in ops {
        match op {
            Op::Insert(key) => assert_eq!(set.insert(*key), expected.insert(*key)),
            Op::Remove(key) => assert_eq!(set.remove(key), expected.take(key)),
        }
        assert_avl(&set);
    }
    (set, expected)
}

quickcheck! {
    fn prop_matches_btree_set(ops: Vec<Op<i8>>) -> bool {
        let (set, expected) = apply(&ops);
        set.len() == expected.len() && set.iter().eq(expected.iter())
    }

    fn prop_contains_iff_present(ops: Vec<Op<i8>>, probes: Vec<i8>) -> bool {
        let (set, expected) = apply(&ops);
        probes.iter().all(|key| set.contains(key) == expected.contains(key))
    }

    fn prop_in_order_strictly_ascending(keys: Vec<i32>, removed: Vec<i32>) -> bool {
        let mut set: AvlSet<i32> = keys.into_iter().collect();
        for key in &removed {
            set.remove(key);
        }
        let in_order: Vec<&i32> = set.iter().collect();
        in_order.windows(2).all(|pair| pair[0] < pair[1])
    }

    fn prop_insert_then_remove_all_is_empty(keys: Vec<u16>) -> bool {
        let mut set: AvlSet<u16> = keys.iter().cloned().collect();
        for key in &keys {
            set.remove(key);
            assert_avl(&set);
        }
        set.is_empty() && set.height() == 0
    }
}
