//! Galaxy generation

use glam::DVec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::neighbors::Locatable;
use crate::rng::Lcg64;
use crate::seed::derive_seed;
use crate::system::SystemRef;

/// A galaxy within the universe
///
/// `systems` holds descriptors, not expanded systems: a galaxy knows which
/// systems it owns (their ids and seeds) without generating any of them.
/// Expansion happens per system via [`crate::StarSystem::from_ref`] or the
/// [`crate::Universe`] facade.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Galaxy {
    /// Stable identifier, `"galaxy_{index}"`
    pub id: String,
    /// Seed all children derive from
    pub seed: u64,
    /// Position in universe space, components in `[-500, 500)`
    pub position: DVec3,
    /// Descriptors of this galaxy's systems, in index order
    pub systems: Vec<SystemRef>,
}

impl Galaxy {
    /// Generate the galaxy at `index` of a universe
    ///
    /// One RNG stream, seeded from `derive_seed(galaxy_seed, "systems")`,
    /// drives the layout. Draw order: system count, then position x, y, z
    /// — four draws total, and the order is part of the output contract.
    /// System ids and seeds are hash-derived and consume no draws.
    ///
    /// # Example
    ///
    /// ```
    /// use cosmogen::Galaxy;
    ///
    /// let galaxy = Galaxy::generate(1, 0);
    /// assert_eq!(galaxy.id, "galaxy_0");
    /// assert!(!galaxy.systems.is_empty());
    /// assert!(galaxy.systems.len() <= 10);
    /// ```
    pub fn generate(universe_seed: u64, index: usize) -> Galaxy {
        let id = format!("galaxy_{index}");
        let seed = derive_seed(universe_seed, &id);

        let mut rng = Lcg64::new(derive_seed(seed, "systems"));
        let count = rng.next_int(10) as usize + 1;
        let systems = (0..count)
            .map(|i| {
                let sys_id = format!("{id}_sys_{i}");
                let sys_seed = derive_seed(seed, &sys_id);
                SystemRef {
                    id: sys_id,
                    seed: sys_seed,
                }
            })
            .collect();
        let position = DVec3::new(
            rng.next_f64() * 1000.0 - 500.0,
            rng.next_f64() * 1000.0 - 500.0,
            rng.next_f64() * 1000.0 - 500.0,
        );

        Galaxy {
            id,
            seed,
            position,
            systems,
        }
    }

    /// Number of systems this galaxy owns
    #[inline]
    pub fn system_count(&self) -> usize {
        self.systems.len()
    }
}

impl Locatable for Galaxy {
    fn ident(&self) -> &str {
        &self.id
    }

    fn position(&self) -> Option<DVec3> {
        Some(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_galaxy() {
        // Anchor values for cross-implementation compatibility.
        let galaxy = Galaxy::generate(1, 0);
        assert_eq!(galaxy.id, "galaxy_0");
        assert_eq!(galaxy.seed, 170283918756534159);
        assert_eq!(galaxy.system_count(), 3);
        assert_eq!(galaxy.position.x, -454.19990008634204);
        assert_eq!(galaxy.position.y, -315.87466849814075);
        assert_eq!(galaxy.position.z, -285.72897575009694);

        let first = &galaxy.systems[0];
        assert_eq!(first.id, "galaxy_0_sys_0");
        assert_eq!(first.seed, 11907396857627262576);
    }

    #[test]
    fn test_system_count_bounds() {
        for seed in 0..50u64 {
            let n = Galaxy::generate(seed, 0).system_count();
            assert!((1..=10).contains(&n), "seed {} gave {} systems", seed, n);
        }
    }

    #[test]
    fn test_position_bounds() {
        for index in 0..50 {
            let p = Galaxy::generate(7, index).position;
            for component in [p.x, p.y, p.z] {
                assert!((-500.0..500.0).contains(&component));
            }
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(Galaxy::generate(42, 3), Galaxy::generate(42, 3));
        assert_ne!(Galaxy::generate(42, 3), Galaxy::generate(42, 4));
        assert_ne!(Galaxy::generate(42, 3), Galaxy::generate(43, 3));
    }

    #[test]
    fn test_child_seeds_are_hash_derived() {
        // A system's seed depends only on (galaxy seed, system id), never
        // on the galaxy's RNG stream.
        let galaxy = Galaxy::generate(9, 2);
        for (i, system) in galaxy.systems.iter().enumerate() {
            let expected_id = format!("{}_sys_{}", galaxy.id, i);
            assert_eq!(system.id, expected_id);
            assert_eq!(system.seed, derive_seed(galaxy.seed, &expected_id));
        }
    }
}
