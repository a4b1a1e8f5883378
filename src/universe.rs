//! Universe facade
//!
//! Ties a configuration to the one piece of shared state the core has: the
//! noise cache. Every universe owns its own cache, so independent
//! universes (and tests) never share tables.

use crate::config::UniverseConfig;
use crate::error::{Result, UniverseError};
use crate::galaxy::Galaxy;
use crate::noise::NoiseCache;
use crate::planet::{Planet, PlanetAttributes};
use crate::plates::{generate_plates, TectonicPlate};
use crate::system::{StarSystem, SystemRef};

/// A reproducible universe rooted at a single 64-bit seed
///
/// Any entity at any level can be requested directly; nothing above or
/// below it is generated as a side effect, and the result is bit-identical
/// regardless of what was generated before.
///
/// # Example
///
/// ```
/// use cosmogen::{Universe, UniverseConfig};
///
/// let universe = Universe::new(UniverseConfig::with_seed(1));
/// let galaxy = universe.galaxy(0).unwrap();
/// let system = universe.expand_system(&galaxy.systems[0]);
/// let planet = &system.planets[0];
/// assert!(planet.radius >= 0.5);
/// ```
#[derive(Debug, Default)]
pub struct Universe {
    config: UniverseConfig,
    noise: NoiseCache,
}

impl Universe {
    /// Create a universe from a validated configuration
    pub fn new(config: UniverseConfig) -> Self {
        Self {
            config,
            noise: NoiseCache::new(),
        }
    }

    /// Create a universe from a bare seed with default counts
    pub fn from_seed(seed: u64) -> Self {
        Self::new(UniverseConfig::with_seed(seed))
    }

    /// The configuration this universe was built from
    #[inline]
    pub fn config(&self) -> &UniverseConfig {
        &self.config
    }

    /// The root seed
    #[inline]
    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    /// This universe's noise cache
    ///
    /// Exposed for callers that sample the noise fields directly (for
    /// example surface detail in a rendering layer).
    #[inline]
    pub fn noise(&self) -> &NoiseCache {
        &self.noise
    }

    /// Generate the galaxy at `index`
    ///
    /// # Errors
    ///
    /// Returns [`UniverseError::EntityNotFound`] when `index` is outside
    /// the configured galaxy count.
    pub fn galaxy(&self, index: usize) -> Result<Galaxy> {
        if index >= self.config.galaxy_count {
            return Err(UniverseError::EntityNotFound(format!(
                "universe has {} galaxies, requested index {}",
                self.config.galaxy_count, index
            )));
        }
        Ok(Galaxy::generate(self.config.seed, index))
    }

    /// Generate every galaxy of the universe
    pub fn galaxies(&self) -> Vec<Galaxy> {
        (0..self.config.galaxy_count)
            .map(|index| Galaxy::generate(self.config.seed, index))
            .collect()
    }

    /// Expand a system descriptor into a full system
    pub fn expand_system(&self, system: &SystemRef) -> StarSystem {
        StarSystem::from_ref(system, &self.noise)
    }

    /// Expand the system at `index` of a galaxy
    ///
    /// # Errors
    ///
    /// Returns [`UniverseError::EntityNotFound`] when `index` is outside
    /// the galaxy's system count.
    pub fn system(&self, galaxy: &Galaxy, index: usize) -> Result<StarSystem> {
        let system = galaxy.systems.get(index).ok_or_else(|| {
            UniverseError::EntityNotFound(format!(
                "galaxy {} has {} systems, requested index {}",
                galaxy.id,
                galaxy.systems.len(),
                index
            ))
        })?;
        Ok(self.expand_system(system))
    }

    /// Generate one planet of a system without building its siblings
    ///
    /// # Errors
    ///
    /// Returns [`UniverseError::EntityNotFound`] when `index` is outside
    /// the system's planet count.
    pub fn planet_at(&self, system: &SystemRef, index: usize) -> Result<Planet> {
        StarSystem::planet_at(&system.id, system.seed, index, &self.noise)
    }

    /// Derive the physical attributes for a planet seed
    ///
    /// Targeted regeneration: given only an entity's seed (for example
    /// from a saved id/seed pair), recompute its attributes without
    /// touching the rest of the hierarchy.
    pub fn planet_attributes(&self, seed: u64) -> PlanetAttributes {
        PlanetAttributes::derive(seed, &self.noise)
    }

    /// Generate a planet's tectonic plate layout at the configured count
    pub fn plates_for(&self, planet: &Planet) -> Vec<TectonicPlate> {
        generate_plates(planet.seed, self.config.plate_count)
    }
}
