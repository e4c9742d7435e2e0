//! The comparison experiment: B+Tree vs hash map, phase by phase.
//!
//! The hash engine is `std::collections::HashMap`, the associative container
//! whose trade-offs the tree is measured against: point operations win,
//! ordered access loses (it must collect and sort every key). Each engine
//! runs the same five phases over the same workload.

use std::collections::HashMap;
use std::hint::black_box;

use tracing::info;

use crate::common::config::DEFAULT_CAPACITY;
use crate::common::Result;
use crate::harness::measure::{measure_phase, MemorySampler};
use crate::harness::report::ReportRow;
use crate::harness::workload::Workload;
use crate::index::{BPlusTree, Key, Value};

/// Phase labels, in execution order.
pub const PHASES: [&str; 5] = ["insert", "search", "range", "ordered", "delete"];

/// Parameters of one experiment run.
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    /// One sub-experiment per data size.
    pub data_sizes: Vec<usize>,
    /// Workload RNG seed.
    pub seed: u64,
    /// Node capacity for the tree engine.
    pub capacity: usize,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            data_sizes: vec![100, 500, 1000],
            seed: 42,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Run every data size through both engines.
///
/// Returns one [`ReportRow`] per (data size, engine, phase).
///
/// # Errors
/// Returns [`crate::Error::InvalidCapacity`] when the configured tree
/// capacity is rejected.
pub fn run_experiment(config: &ExperimentConfig) -> Result<Vec<ReportRow>> {
    // Surface a bad capacity before any timing starts
    BPlusTree::with_capacity(config.capacity)?;

    let mut sampler = MemorySampler::new();
    let mut rows = Vec::new();

    for &data_size in &config.data_sizes {
        let workload = Workload::generate(data_size, config.seed);

        rows.extend(run_hash_phases(&workload, &mut sampler));
        rows.extend(run_tree_phases(&workload, config.capacity, &mut sampler)?);

        info!(data_size, "experiment pass complete");
    }

    Ok(rows)
}

fn run_tree_phases(
    workload: &Workload,
    capacity: usize,
    sampler: &mut MemorySampler,
) -> Result<Vec<ReportRow>> {
    let data_size = workload.len();
    let mut rows = Vec::with_capacity(PHASES.len());
    let mut tree = BPlusTree::with_capacity(capacity)?;

    let (_, m) = measure_phase(sampler, || {
        for (position, &key) in workload.keys().iter().enumerate() {
            tree.insert(key, position as Value);
        }
    });
    rows.push(ReportRow::new(data_size, "bptree", "insert", m));

    let (_, m) = measure_phase(sampler, || {
        for &key in workload.keys() {
            black_box(tree.search(key));
        }
    });
    rows.push(ReportRow::new(data_size, "bptree", "search", m));

    let (lo, hi) = workload.range_bounds();
    let (_, m) = measure_phase(sampler, || {
        black_box(tree.range_search(lo, hi));
    });
    rows.push(ReportRow::new(data_size, "bptree", "range", m));

    let (_, m) = measure_phase(sampler, || {
        for entry in tree.iter() {
            black_box(entry);
        }
    });
    rows.push(ReportRow::new(data_size, "bptree", "ordered", m));

    let (_, m) = measure_phase(sampler, || {
        for &key in workload.keys() {
            tree.delete(key);
        }
    });
    rows.push(ReportRow::new(data_size, "bptree", "delete", m));

    Ok(rows)
}

fn run_hash_phases(workload: &Workload, sampler: &mut MemorySampler) -> Vec<ReportRow> {
    let data_size = workload.len();
    let mut rows = Vec::with_capacity(PHASES.len());
    let mut map: HashMap<Key, Value> = HashMap::new();

    let (_, m) = measure_phase(sampler, || {
        for (position, &key) in workload.keys().iter().enumerate() {
            map.insert(key, position as Value);
        }
    });
    rows.push(ReportRow::new(data_size, "hashmap", "insert", m));

    let (_, m) = measure_phase(sampler, || {
        for &key in workload.keys() {
            black_box(map.get(&key));
        }
    });
    rows.push(ReportRow::new(data_size, "hashmap", "search", m));

    // No order to exploit: the hash engine scans every entry for the range
    let (lo, hi) = workload.range_bounds();
    let (_, m) = measure_phase(sampler, || {
        let hits: Vec<(Key, Value)> = map
            .iter()
            .filter(|(&key, _)| key >= lo && key <= hi)
            .map(|(&key, &value)| (key, value))
            .collect();
        black_box(hits);
    });
    rows.push(ReportRow::new(data_size, "hashmap", "range", m));

    // Ordered traversal means collecting and sorting every key first
    let (_, m) = measure_phase(sampler, || {
        let mut keys: Vec<Key> = map.keys().copied().collect();
        keys.sort_unstable();
        for key in keys {
            black_box(map[&key]);
        }
    });
    rows.push(ReportRow::new(data_size, "hashmap", "ordered", m));

    let (_, m) = measure_phase(sampler, || {
        for &key in workload.keys() {
            map.remove(&key);
        }
    });
    rows.push(ReportRow::new(data_size, "hashmap", "delete", m));

    rows
}
