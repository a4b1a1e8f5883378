//! Universe configuration and builder
//!
//! A configuration is a handful of integers; the generated universe is a
//! pure function of it. Serializing the configuration (with the `serde`
//! feature) is all that is needed to reproduce a universe elsewhere.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, UniverseError};
use crate::plates::DEFAULT_PLATE_COUNT;
use crate::seed::parse_seed;

/// Upper bound on configured galaxy counts
const MAX_GALAXY_COUNT: usize = 10_000;

/// Upper bound on configured per-planet plate counts
const MAX_PLATE_COUNT: usize = 1_024;

/// Configuration for deterministic universe generation
///
/// The same configuration always produces the identical universe, across
/// runs, machines, and call orders.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniverseConfig {
    /// Root seed every entity in the hierarchy derives from
    pub seed: u64,

    /// Number of galaxies the universe exposes
    pub galaxy_count: usize,

    /// Tectonic plates generated per planet
    pub plate_count: usize,
}

impl UniverseConfig {
    /// Configuration with the given seed and default counts
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            galaxy_count: 10,
            plate_count: DEFAULT_PLATE_COUNT,
        }
    }
}

impl Default for UniverseConfig {
    fn default() -> Self {
        UniverseConfigBuilder::new().build().unwrap()
    }
}

/// Builder for creating [`UniverseConfig`] with validation
///
/// Count parameters are range-checked here, at the boundary; the
/// generators themselves never validate, they only derive and compute.
///
/// # Example
///
/// ```
/// use cosmogen::UniverseConfigBuilder;
///
/// let config = UniverseConfigBuilder::new()
///     .seed(42)
///     .galaxy_count(32)
///     .unwrap()
///     .plate_count(12)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.seed, 42);
/// assert_eq!(config.galaxy_count, 32);
/// ```
#[derive(Debug, Clone)]
pub struct UniverseConfigBuilder {
    seed: Option<u64>,
    galaxy_count: usize,
    plate_count: usize,
}

impl UniverseConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - seed: random (generated from thread_rng)
    /// - galaxy_count: 10
    /// - plate_count: 10
    pub fn new() -> Self {
        Self {
            seed: None,
            galaxy_count: 10,
            plate_count: DEFAULT_PLATE_COUNT,
        }
    }

    /// Set the root seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the root seed from its external string form (URL parameter,
    /// CLI flag)
    ///
    /// # Errors
    ///
    /// Returns [`UniverseError::InvalidSeed`] for anything that is not a
    /// decimal or `0x`-prefixed 64-bit unsigned integer.
    pub fn seed_str(mut self, seed: &str) -> Result<Self> {
        self.seed = Some(parse_seed(seed)?);
        Ok(self)
    }

    /// Set the number of galaxies
    ///
    /// # Errors
    ///
    /// Returns [`UniverseError::InvalidConfig`] if the count exceeds
    /// 10,000.
    pub fn galaxy_count(mut self, count: usize) -> Result<Self> {
        if count > MAX_GALAXY_COUNT {
            return Err(UniverseError::InvalidConfig(format!(
                "galaxy count must be <= {} (got {})",
                MAX_GALAXY_COUNT, count
            )));
        }
        self.galaxy_count = count;
        Ok(self)
    }

    /// Set the number of tectonic plates per planet
    ///
    /// # Errors
    ///
    /// Returns [`UniverseError::InvalidConfig`] if the count exceeds
    /// 1,024.
    pub fn plate_count(mut self, count: usize) -> Result<Self> {
        if count > MAX_PLATE_COUNT {
            return Err(UniverseError::InvalidConfig(format!(
                "plate count must be <= {} (got {})",
                MAX_PLATE_COUNT, count
            )));
        }
        self.plate_count = count;
        Ok(self)
    }

    /// Build the configuration
    ///
    /// If no seed was provided, generates a random one using thread_rng.
    pub fn build(self) -> Result<UniverseConfig> {
        let seed = self.seed.unwrap_or_else(rand::random);
        Ok(UniverseConfig {
            seed,
            galaxy_count: self.galaxy_count,
            plate_count: self.plate_count,
        })
    }
}

impl Default for UniverseConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = UniverseConfigBuilder::new().build().unwrap();
        assert_eq!(config.galaxy_count, 10);
        assert_eq!(config.plate_count, DEFAULT_PLATE_COUNT);
        let _seed = config.seed; // random, just verify it was set
    }

    #[test]
    fn test_builder_custom() {
        let config = UniverseConfigBuilder::new()
            .seed(7)
            .galaxy_count(3)
            .unwrap()
            .plate_count(20)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.galaxy_count, 3);
        assert_eq!(config.plate_count, 20);
    }

    #[test]
    fn test_seed_str_boundary() {
        let config = UniverseConfigBuilder::new()
            .seed_str("12345")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.seed, 12345);

        assert!(UniverseConfigBuilder::new().seed_str("-3").is_err());
        assert!(UniverseConfigBuilder::new().seed_str("2.5").is_err());
    }

    #[test]
    fn test_count_validation() {
        assert!(UniverseConfigBuilder::new().galaxy_count(10_000).is_ok());
        assert!(UniverseConfigBuilder::new().galaxy_count(10_001).is_err());
        assert!(UniverseConfigBuilder::new().plate_count(1_024).is_ok());
        assert!(UniverseConfigBuilder::new().plate_count(1_025).is_err());
    }

    #[test]
    fn test_with_seed() {
        let config = UniverseConfig::with_seed(99);
        assert_eq!(config.seed, 99);
        assert_eq!(config.galaxy_count, 10);
        assert_eq!(config.plate_count, 10);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serialization() {
        let config = UniverseConfig::with_seed(321);
        let json = serde_json::to_string(&config).unwrap();
        let restored: UniverseConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }
}
