//! Random key workloads for the comparison experiment.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::index::Key;

/// A generated key sequence for one experiment run.
///
/// Keys are drawn uniformly from `[0, 2 * data_size)`, so roughly 40% of a
/// run's inserts hit an existing key and exercise overwrite. The generator
/// is seeded, making every run reproducible.
#[derive(Debug, Clone)]
pub struct Workload {
    keys: Vec<Key>,
}

impl Workload {
    /// Generate `data_size` keys from the given seed.
    pub fn generate(data_size: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let bound = (data_size as Key * 2).max(1);
        let keys = (0..data_size).map(|_| rng.gen_range(0..bound)).collect();
        Self { keys }
    }

    /// The key sequence, in insertion order.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Number of keys in the workload.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True for a zero-size workload.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Bounds of the experiment's range-query phase: `[N/2, 3N/2]`, i.e. the
    /// upper three quarters of the inserted key domain.
    pub fn range_bounds(&self) -> (Key, Key) {
        let n = self.keys.len() as Key;
        (n / 2, n + n / 2)
    }
}
