//! Planet descriptors and derived attributes

use glam::DVec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::neighbors::Locatable;
use crate::noise::NoiseCache;
use crate::plates::{generate_plates, TectonicPlate};
use crate::rng::Lcg64;
use crate::seed::derive_seed;

use std::f64::consts::TAU;

/// Orbital placement of a planet within its system
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    /// Distance from the star, in system units
    pub distance: f64,
    /// Angle around the star's equatorial plane, radians
    pub angle: f64,
}

/// Physical attributes derived purely from a planet seed
///
/// Each attribute comes from its own independently derived noise seed
/// (labels `"radius"`, `"density"`, `"atmosphere"`), NOT from a shared RNG
/// stream, so the attributes can be computed in any order — unlike orbital
/// placement, where draw order on the system stream is part of the output
/// contract. The two styles are distinct on purpose; do not fold one into
/// the other, every derived value downstream would change.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetAttributes {
    /// Planet radius in `[0.5, 3.0]`
    pub radius: f64,
    /// Mean density in `[0.5, 5.0]`
    pub density: f64,
    /// Mass, `radius³ · density`
    pub mass: f64,
    /// Surface gravity, `mass / radius²`
    pub gravity: f64,
    /// Atmosphere thickness in `[0, 1]`
    pub atmosphere: f64,
}

impl PlanetAttributes {
    /// Derive the attribute set for a planet seed
    ///
    /// Recomputing from the same seed always reproduces the same values;
    /// attributes are never mutated after creation.
    pub fn derive(seed: u64, noise: &NoiseCache) -> Self {
        let radius = 0.5 + noise.noise01(seed, "radius") * 2.5;
        let density = 0.5 + noise.noise01(seed, "density") * 4.5;
        let mass = radius * radius * radius * density;
        let gravity = mass / (radius * radius);
        let atmosphere = noise.noise01(seed, "atmosphere");
        Self {
            radius,
            density,
            mass,
            gravity,
            atmosphere,
        }
    }
}

/// A single planet of a star system
///
/// Created in one generation call and immutable afterwards, except for the
/// lazy `plates` expansion. Holds no back-reference to its system beyond
/// the `id`/`seed` values embedded at generation time.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    /// Stable identifier, `"{systemId}_planet_{index}"`
    pub id: String,
    /// Seed this planet's attributes and plates derive from
    pub seed: u64,
    /// Position relative to the system's star
    pub position: DVec3,
    /// Orbital parameters the position was computed from
    pub orbit: Orbit,
    /// Planet radius in `[0.5, 3.0]`
    pub radius: f64,
    /// Mean density in `[0.5, 5.0]`
    pub density: f64,
    /// Mass, `radius³ · density`
    pub mass: f64,
    /// Surface gravity, `mass / radius²`
    pub gravity: f64,
    /// Atmosphere thickness in `[0, 1]`
    pub atmosphere: f64,
    /// Tectonic plate layout, absent until [`Planet::expand_plates`] runs
    pub plates: Option<Vec<TectonicPlate>>,
}

impl Planet {
    /// Generate the planet at `index` of a system, consuming the system's
    /// orbital RNG stream
    ///
    /// Draw order on `rng` is angle, then distance — two draws per planet,
    /// shared across the whole system stream. Attributes come from the
    /// planet's own derived seed and consume no stream draws.
    pub(crate) fn generate_in_orbit(
        system_id: &str,
        system_seed: u64,
        index: usize,
        rng: &mut Lcg64,
        noise: &NoiseCache,
    ) -> Planet {
        let id = format!("{system_id}_planet_{index}");
        let seed = derive_seed(system_seed, &id);

        let angle = rng.next_f64() * TAU;
        let distance = (index + 1) as f64 * 10.0 + rng.next_f64() * 5.0;
        let orbit = Orbit { distance, angle };
        let position = DVec3::new(angle.cos() * distance, 0.0, angle.sin() * distance);

        let attrs = PlanetAttributes::derive(seed, noise);
        Planet {
            id,
            seed,
            position,
            orbit,
            radius: attrs.radius,
            density: attrs.density,
            mass: attrs.mass,
            gravity: attrs.gravity,
            atmosphere: attrs.atmosphere,
            plates: None,
        }
    }

    /// The attribute subset of this planet
    pub fn attributes(&self) -> PlanetAttributes {
        PlanetAttributes {
            radius: self.radius,
            density: self.density,
            mass: self.mass,
            gravity: self.gravity,
            atmosphere: self.atmosphere,
        }
    }

    /// Lazily populate the tectonic plate layout from this planet's seed
    ///
    /// Idempotent for a given count: the layout is a pure function of
    /// `(seed, count)`.
    pub fn expand_plates(&mut self, count: usize) {
        self.plates = Some(generate_plates(self.seed, count));
    }
}

impl Locatable for Planet {
    fn ident(&self) -> &str {
        &self.id
    }

    fn position(&self) -> Option<DVec3> {
        Some(self.position)
    }
}
