//! Tectonic plate layout generation

use glam::DVec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rng::Lcg64;
use crate::seed::derive_seed;

use std::f64::consts::TAU;

/// Plate count used when the configuration does not override it
pub const DEFAULT_PLATE_COUNT: usize = 10;

/// A single tectonic plate on a planet's surface
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TectonicPlate {
    /// Plate index on its planet
    pub id: usize,
    /// Plate origin, a unit vector on the planet sphere
    pub center: DVec3,
    /// Drift direction and speed, components in `[-1, 1]`
    pub motion: DVec3,
}

/// Generate the plate layout for a planet seed
///
/// The stream is seeded from `derive_seed(planet_seed, "plates")` and each
/// plate consumes exactly six draws in fixed order: u, v (sphere point),
/// then motion x, y, z. `u`/`v` map to a uniformly distributed point on
/// the unit sphere via `θ = 2πu`, `φ = acos(2v - 1)`.
///
/// # Example
///
/// ```
/// use cosmogen::generate_plates;
///
/// let plates = generate_plates(123, 10);
/// assert_eq!(plates.len(), 10);
/// for plate in &plates {
///     assert!((plate.center.length() - 1.0).abs() < 1e-12);
/// }
/// ```
pub fn generate_plates(planet_seed: u64, count: usize) -> Vec<TectonicPlate> {
    let mut rng = Lcg64::new(derive_seed(planet_seed, "plates"));
    (0..count)
        .map(|id| {
            let u = rng.next_f64();
            let v = rng.next_f64();
            let theta = TAU * u;
            let phi = (2.0 * v - 1.0).acos();
            let center = DVec3::new(
                phi.sin() * theta.cos(),
                phi.sin() * theta.sin(),
                phi.cos(),
            );
            let motion = DVec3::new(
                rng.next_f64() * 2.0 - 1.0,
                rng.next_f64() * 2.0 - 1.0,
                rng.next_f64() * 2.0 - 1.0,
            );
            TectonicPlate { id, center, motion }
        })
        .collect()
}
