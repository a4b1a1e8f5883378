//! Seed-keyed 3D Perlin noise with a shared permutation-table cache
//!
//! The cache is the only mutable shared state in the whole crate. Each
//! distinct seed gets its permutation table built at most once per cache;
//! independent universes (and tests) get isolated caches by constructing
//! their own [`NoiseCache`].

mod perlin;

use perlin::{build_permutation, perlin_3d, TABLE_LEN};

use crate::seed::derive_seed;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Cache of per-seed permutation tables plus the noise queries over them
///
/// Concurrency contract: tables are built completely before they are
/// published into the map, and insertion is insert-if-absent, so a race
/// between two threads building the same seed's table does redundant work
/// but both end up reading the exact same (first-inserted) table. Readers
/// never observe a partially filled table.
///
/// # Example
///
/// ```
/// use cosmogen::NoiseCache;
///
/// let noise = NoiseCache::new();
/// let a = noise.perlin(0.5, 0.5, 0.5, 42);
/// let b = noise.perlin(0.5, 0.5, 0.5, 42);
/// assert_eq!(a, b);
/// assert_eq!(noise.table_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct NoiseCache {
    tables: RwLock<HashMap<u64, Arc<Vec<u8>>>>,
}

impl NoiseCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
        }
    }

    /// Fetch the permutation table for `seed`, building it on first use
    fn table(&self, seed: u64) -> Arc<Vec<u8>> {
        // A poisoned lock only means some other thread panicked mid-read;
        // tables are immutable once published, so the map is still valid.
        {
            let map = self.tables.read().unwrap_or_else(|e| e.into_inner());
            if let Some(table) = map.get(&seed) {
                if table.len() == TABLE_LEN {
                    return Arc::clone(table);
                }
            }
        }

        log::trace!("building permutation table for seed {}", seed);
        let built = Arc::new(build_permutation(seed));

        let mut map = self.tables.write().unwrap_or_else(|e| e.into_inner());
        let entry = map.entry(seed).or_insert(built);
        if entry.len() != TABLE_LEN {
            // Should never happen; rebuild instead of trusting the entry.
            log::warn!(
                "permutation table for seed {} has {} entries, expected {}; rebuilding",
                seed,
                entry.len(),
                TABLE_LEN
            );
            *entry = Arc::new(build_permutation(seed));
        }
        Arc::clone(entry)
    }

    /// Sample 3D Perlin noise at `(x, y, z)` for a seed
    ///
    /// Output is approximately `[-1, 1]`. The same `(x, y, z, seed)` always
    /// returns the bit-identical value, across caches and processes.
    pub fn perlin(&self, x: f64, y: f64, z: f64, seed: u64) -> f64 {
        perlin_3d(&self.table(seed), x, y, z)
    }

    /// Map a `(seed, label)` pair to a reproducible scalar in `[0, 1]`
    ///
    /// Samples the noise field keyed by `derive_seed(seed, label)` at the
    /// origin and rescales from `[-1, 1]` to `[0, 1]`. Because every label
    /// keys an independent field, values for different labels can be
    /// computed in any order.
    pub fn noise01(&self, seed: u64, label: &str) -> f64 {
        (self.perlin(0.0, 0.0, 0.0, derive_seed(seed, label)) + 1.0) / 2.0
    }

    /// Number of distinct seeds with a cached table
    pub fn table_count(&self) -> usize {
        self.tables
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    /// Test hook: plant a malformed table to exercise the rebuild path
    #[cfg(test)]
    fn inject_table(&self, seed: u64, table: Vec<u8>) {
        self.tables
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(seed, Arc::new(table));
    }
}
