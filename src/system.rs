//! Star system generation

use glam::DVec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, UniverseError};
use crate::neighbors::Locatable;
use crate::noise::NoiseCache;
use crate::planet::Planet;
use crate::rng::Lcg64;
use crate::seed::derive_seed;

/// Lightweight descriptor of a not-yet-expanded system
///
/// Holds exactly what is needed to regenerate the system on demand: its id
/// and seed. Galaxies carry these instead of full systems so that
/// requesting one galaxy never forces generation of its whole subtree.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemRef {
    /// Stable identifier, `"{galaxyId}_sys_{index}"`
    pub id: String,
    /// Seed the expanded system derives from
    pub seed: u64,
}

/// The star at the center of a system
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Seed derived from the system seed under the `"star"` label
    pub seed: u64,
    /// Star radius in `[1, 2)`
    pub radius: f64,
}

/// A fully expanded star system
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct StarSystem {
    /// Stable identifier
    pub id: String,
    /// Seed all children derive from
    pub seed: u64,
    /// Central star
    pub star: Star,
    /// Planets in orbit index order
    pub planets: Vec<Planet>,
}

impl StarSystem {
    /// Expand a system from its id and seed
    ///
    /// One RNG stream, seeded from `derive_seed(seed, "planets")`, drives
    /// the whole layout. Draw order: planet count, then per planet (in
    /// index order) angle and distance, then LAST the star radius. The
    /// star draw deliberately lands after every planet draw; moving it
    /// shifts all values behind it, so the order is part of the output
    /// contract.
    ///
    /// # Example
    ///
    /// ```
    /// use cosmogen::{NoiseCache, StarSystem};
    ///
    /// let noise = NoiseCache::new();
    /// let system = StarSystem::generate("galaxy_0_sys_0", 7, &noise);
    /// assert!(!system.planets.is_empty());
    /// assert!(system.planets.len() <= 8);
    /// ```
    pub fn generate(id: &str, seed: u64, noise: &NoiseCache) -> StarSystem {
        let mut rng = Lcg64::new(derive_seed(seed, "planets"));
        let count = rng.next_int(8) as usize + 1;
        let mut planets = Vec::with_capacity(count);
        for index in 0..count {
            planets.push(Planet::generate_in_orbit(id, seed, index, &mut rng, noise));
        }
        let star = Star {
            seed: derive_seed(seed, "star"),
            radius: 1.0 + rng.next_f64(),
        };
        StarSystem {
            id: id.to_string(),
            seed,
            star,
            planets,
        }
    }

    /// Expand a system from its descriptor
    pub fn from_ref(system: &SystemRef, noise: &NoiseCache) -> StarSystem {
        Self::generate(&system.id, system.seed, noise)
    }

    /// Generate a single planet of a system without building its siblings
    ///
    /// Replays the orbital stream up to `index` (the count draw plus two
    /// draws per preceding planet), so the result is bit-identical to
    /// `generate(...).planets[index]` — including position and orbit,
    /// which only reproduce when the stream is replayed in order.
    ///
    /// # Errors
    ///
    /// Returns [`UniverseError::EntityNotFound`] when `index` is outside
    /// the system's planet count.
    pub fn planet_at(id: &str, seed: u64, index: usize, noise: &NoiseCache) -> Result<Planet> {
        let mut rng = Lcg64::new(derive_seed(seed, "planets"));
        let count = rng.next_int(8) as usize + 1;
        if index >= count {
            return Err(UniverseError::EntityNotFound(format!(
                "system {} has {} planets, requested index {}",
                id, count, index
            )));
        }
        for _ in 0..index {
            rng.next_f64(); // angle of a preceding planet
            rng.next_f64(); // distance of a preceding planet
        }
        Ok(Planet::generate_in_orbit(id, seed, index, &mut rng, noise))
    }
}

impl Locatable for StarSystem {
    fn ident(&self) -> &str {
        &self.id
    }

    // Systems have no position of their own; they are placed implicitly by
    // their galaxy. Position-less entities are never neighbor matches.
    fn position(&self) -> Option<DVec3> {
        None
    }
}

impl Locatable for SystemRef {
    fn ident(&self) -> &str {
        &self.id
    }

    fn position(&self) -> Option<DVec3> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Seed of "galaxy_0_sys_0" under universe seed 1 (see galaxy.rs tests)
    const SYS_ID: &str = "galaxy_0_sys_0";
    const SYS_SEED: u64 = 11907396857627262576;

    #[test]
    fn test_pinned_system() {
        // Anchor values for cross-implementation compatibility.
        let noise = NoiseCache::new();
        let system = StarSystem::generate(SYS_ID, SYS_SEED, &noise);

        assert_eq!(system.planets.len(), 2);
        assert_eq!(system.star.seed, 847462071291109089);
        assert_eq!(system.star.radius, 1.1932313182680301);

        let first = &system.planets[0];
        assert_eq!(first.id, "galaxy_0_sys_0_planet_0");
        assert_eq!(first.seed, 17186534056631817029);
        assert_eq!(first.orbit.angle, 5.2137309954187527);
        assert_eq!(first.orbit.distance, 13.249561782825239);
        // Positions go through sin/cos; allow for ULP differences between
        // libm builds.
        assert!((first.position.x - 6.3677769622060074).abs() < 1e-9);
        assert_eq!(first.position.y, 0.0);
        assert!((first.position.z - -11.619049186422338).abs() < 1e-9);

        let second = &system.planets[1];
        assert_eq!(second.seed, 17186532957120189938);
        assert_eq!(second.orbit.angle, 3.7710431633925272);
        assert_eq!(second.orbit.distance, 21.295249934994143);
    }

    #[test]
    fn test_planet_count_bounds() {
        let noise = NoiseCache::new();
        for seed in 0..50u64 {
            let system = StarSystem::generate("s", seed, &noise);
            let n = system.planets.len();
            assert!((1..=8).contains(&n), "seed {} gave {} planets", seed, n);
        }
    }

    #[test]
    fn test_star_radius_range() {
        let noise = NoiseCache::new();
        for seed in 0..50u64 {
            let r = StarSystem::generate("s", seed, &noise).star.radius;
            assert!((1.0..2.0).contains(&r));
        }
    }

    #[test]
    fn test_orbit_distance_grows_with_index() {
        let noise = NoiseCache::new();
        let system = StarSystem::generate("s", 3, &noise);
        for (i, planet) in system.planets.iter().enumerate() {
            let base = (i + 1) as f64 * 10.0;
            assert!(planet.orbit.distance >= base);
            assert!(planet.orbit.distance < base + 5.0);
        }
    }

    #[test]
    fn test_planet_at_matches_sequential() {
        // Direct generation replays the stream, so even the
        // order-dependent position/orbit values must match exactly.
        let noise = NoiseCache::new();
        let system = StarSystem::generate(SYS_ID, SYS_SEED, &noise);
        for (index, expected) in system.planets.iter().enumerate() {
            let direct = StarSystem::planet_at(SYS_ID, SYS_SEED, index, &noise).unwrap();
            assert_eq!(&direct, expected);
        }
    }

    #[test]
    fn test_planet_at_out_of_range() {
        let noise = NoiseCache::new();
        let result = StarSystem::planet_at(SYS_ID, SYS_SEED, 99, &noise);
        assert!(matches!(result, Err(UniverseError::EntityNotFound(_))));
    }

    #[test]
    fn test_from_ref() {
        let noise = NoiseCache::new();
        let system_ref = SystemRef {
            id: SYS_ID.to_string(),
            seed: SYS_SEED,
        };
        let a = StarSystem::from_ref(&system_ref, &noise);
        let b = StarSystem::generate(SYS_ID, SYS_SEED, &noise);
        assert_eq!(a, b);
    }
}
