//! Integration tests for the B+Tree index.
//!
//! These tests verify end-to-end behavior over realistic workloads that unit
//! tests don't cover: random streams with duplicates, mixed mutation
//! patterns, and full lifecycle runs, each cross-checked against
//! `std::collections::BTreeMap` and the structural invariant checker.

use std::collections::BTreeMap;

use leafchain::{BPlusTree, Key, Value};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_keys(count: usize, seed: u64) -> Vec<Key> {
    let mut rng = StdRng::seed_from_u64(seed);
    let bound = (count as Key * 2).max(1);
    (0..count).map(|_| rng.gen_range(0..bound)).collect()
}

/// Random inserts with duplicates: the tree must end up holding exactly the
/// distinct keys, each mapped to its last-inserted value.
#[test]
fn test_random_inserts_with_duplicates() {
    let keys = random_keys(1000, 0xC0FFEE);

    let mut tree = BPlusTree::with_capacity(3).unwrap();
    let mut model: BTreeMap<Key, Value> = BTreeMap::new();

    for (position, &key) in keys.iter().enumerate() {
        tree.insert(key, position as Value);
        model.insert(key, position as Value);
    }
    tree.check_invariants().unwrap();

    assert_eq!(tree.len(), model.len());

    let traversed: Vec<(Key, Value)> = tree.iter().collect();
    let expected: Vec<(Key, Value)> = model.iter().map(|(&k, &v)| (k, v)).collect();
    assert_eq!(traversed, expected);

    // Traversal is strictly ascending with no repeats
    for window in traversed.windows(2) {
        assert!(window[0].0 < window[1].0);
    }

    for (&key, &value) in &model {
        assert_eq!(tree.search(key), Some(value));
    }
}

/// Deleting every inserted key, in a scrambled order, must leave the tree
/// empty and searchable-for-nothing.
#[test]
fn test_deletion_completeness() {
    let keys = random_keys(1000, 0xBEEF);

    let mut tree = BPlusTree::with_capacity(4).unwrap();
    for (position, &key) in keys.iter().enumerate() {
        tree.insert(key, position as Value);
    }

    let mut distinct: Vec<Key> = keys.clone();
    distinct.sort_unstable();
    distinct.dedup();

    // Scramble the deletion order away from insertion order
    let mut rng = StdRng::seed_from_u64(0xBEEF ^ 1);
    for i in (1..distinct.len()).rev() {
        distinct.swap(i, rng.gen_range(0..=i));
    }

    for &key in &distinct {
        assert!(tree.delete(key), "key {} should be present", key);
    }
    tree.check_invariants().unwrap();

    assert!(tree.is_empty());
    assert_eq!(tree.iter().count(), 0);
    for &key in &distinct {
        assert_eq!(tree.search(key), None);
        assert!(!tree.delete(key));
    }
}

/// Interleaved inserts and deletes with invariants checked along the way.
#[test]
fn test_mixed_mutations_hold_invariants() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut tree = BPlusTree::with_capacity(3).unwrap();
    let mut model: BTreeMap<Key, Value> = BTreeMap::new();

    for round in 0..2000 {
        let key = rng.gen_range(0..200);
        if rng.gen_bool(0.6) {
            let expected = model.insert(key, round);
            assert_eq!(tree.insert(key, round), expected);
        } else {
            let expected = model.remove(&key).is_some();
            assert_eq!(tree.delete(key), expected);
        }

        if round % 50 == 0 {
            tree.check_invariants().unwrap();
        }
    }

    tree.check_invariants().unwrap();
    let traversed: Vec<(Key, Value)> = tree.iter().collect();
    let expected: Vec<(Key, Value)> = model.iter().map(|(&k, &v)| (k, v)).collect();
    assert_eq!(traversed, expected);
}

/// Range results must match the model for arbitrary bounds, including
/// reversed and out-of-domain ones.
#[test]
fn test_range_search_against_model() {
    let keys = random_keys(600, 0xABCD);

    let mut tree = BPlusTree::with_capacity(5).unwrap();
    let mut model: BTreeMap<Key, Value> = BTreeMap::new();
    for (position, &key) in keys.iter().enumerate() {
        tree.insert(key, position as Value);
        model.insert(key, position as Value);
    }

    let mut rng = StdRng::seed_from_u64(0xABCD ^ 1);
    for _ in 0..100 {
        let a = rng.gen_range(-100..1400);
        let b = rng.gen_range(-100..1400);

        let expected: Vec<(Key, Value)> = if a <= b {
            model.range(a..=b).map(|(&k, &v)| (k, v)).collect()
        } else {
            Vec::new()
        };
        assert_eq!(tree.range_search(a, b), expected, "bounds [{}, {}]", a, b);
    }
}

/// A tree must stay usable through repeated fill/drain cycles (slot reuse).
#[test]
fn test_fill_and_drain_cycles() {
    let mut tree = BPlusTree::with_capacity(3).unwrap();

    for cycle in 0..5 {
        for key in 0..300 {
            tree.insert(key, key + cycle);
        }
        tree.check_invariants().unwrap();
        assert_eq!(tree.len(), 300);

        for key in 0..300 {
            assert!(tree.delete(key));
        }
        tree.check_invariants().unwrap();
        assert!(tree.is_empty());
    }
}

/// Larger capacities shrink the height without changing observable behavior.
#[test]
fn test_behavior_independent_of_capacity() {
    let keys = random_keys(800, 99);

    let mut small = BPlusTree::with_capacity(3).unwrap();
    let mut large = BPlusTree::with_capacity(64).unwrap();
    for (position, &key) in keys.iter().enumerate() {
        small.insert(key, position as Value);
        large.insert(key, position as Value);
    }

    assert!(small.height() > large.height());
    assert_eq!(
        small.iter().collect::<Vec<_>>(),
        large.iter().collect::<Vec<_>>()
    );

    small.check_invariants().unwrap();
    large.check_invariants().unwrap();
}
