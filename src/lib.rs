//! Deterministic procedural universe generation
//!
//! Turns a single 64-bit seed into a reproducible hierarchy of galaxies,
//! star systems, planets and tectonic plate layouts. Every level derives
//! its children's seeds by hashing, so any entity can be requested
//! directly — a specific galaxy, a specific planet — without generating
//! anything above or below it, and the result is bit-identical for a
//! given seed path across runs, machines and call orders.
//!
//! # Quick Start
//!
//! ```rust
//! use cosmogen::*;
//!
//! let config = UniverseConfigBuilder::new()
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let universe = Universe::new(config);
//!
//! // Generate one galaxy, expand one of its systems
//! let galaxy = universe.galaxy(0).unwrap();
//! let system = universe.expand_system(&galaxy.systems[0]);
//!
//! // Planet attributes derive from the planet's seed alone
//! let planet = &system.planets[0];
//! println!("radius {} gravity {}", planet.radius, planet.gravity);
//!
//! // Tectonic plates are generated per planet on demand
//! let plates = universe.plates_for(planet);
//! assert_eq!(plates.len(), universe.config().plate_count);
//! ```
//!
//! # Determinism
//!
//! Two randomness styles coexist, on purpose:
//!
//! - **Stream draws** (galaxy layout, orbital placement, plates): a seeded
//!   [`Lcg64`] stream where draw order is part of the output contract.
//! - **Label derivation** (planet attributes): independent seeds hashed
//!   per attribute label, order-free by construction.
//!
//! Both reduce to fixed 64-bit wraparound arithmetic, so results are
//! stable across platforms.
//!
//! # Features
//!
//! - `spatial-index` (default): KD-tree position lookups via [`SpatialIndex`]
//! - `serde`: serialization for configuration and entity descriptors

// Modules
pub mod config;
pub mod error;
pub mod galaxy;
pub mod neighbors;
pub mod noise;
pub mod planet;
pub mod plates;
pub mod rng;
pub mod seed;
pub mod system;
pub mod universe;

#[cfg(feature = "spatial-index")]
pub mod spatial;

// Re-export core types for convenience
pub use config::{UniverseConfig, UniverseConfigBuilder};
pub use error::{Result, UniverseError};
pub use galaxy::Galaxy;
pub use neighbors::{find_neighbors, Locatable, Neighbor};
pub use noise::NoiseCache;
pub use planet::{Orbit, Planet, PlanetAttributes};
pub use plates::{generate_plates, TectonicPlate, DEFAULT_PLATE_COUNT};
pub use rng::Lcg64;
pub use seed::{derive_seed, parse_seed};
pub use system::{Star, StarSystem, SystemRef};
pub use universe::Universe;

#[cfg(feature = "spatial-index")]
pub use spatial::SpatialIndex;

// Re-export glam::DVec3 for convenience
pub use glam::DVec3;
