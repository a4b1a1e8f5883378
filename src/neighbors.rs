//! Proximity queries over generated entity populations

use glam::DVec3;

/// An entity that can take part in neighbor queries
///
/// Implemented by every generated entity type. Entities that are not
/// placed in any space (systems, system descriptors) report `None` and
/// are never neighbor matches.
pub trait Locatable {
    /// Stable identifier, used to exclude the target from its own results
    fn ident(&self) -> &str;

    /// Position in the entity's ambient space, if it has one
    fn position(&self) -> Option<DVec3>;
}

/// A single neighbor match, annotated with its distance to the target
///
/// Transient query output; borrows the matched entity rather than cloning
/// it and is not meant to be persisted.
#[derive(Debug, Clone, Copy)]
pub struct Neighbor<'a, T> {
    /// The matched entity
    pub entity: &'a T,
    /// Euclidean distance between target and entity
    pub distance: f64,
}

/// Find all population members within `max_distance` of `target`
///
/// Linear scan: output order is the population's iteration order, NOT
/// sorted by distance — callers that want distance order sort the result.
/// The target itself is excluded by id, position-less entities are
/// skipped, and the boundary is inclusive (`distance <= max_distance`).
/// A position-less target has no distances to anything and matches
/// nothing.
///
/// O(n) per query; at the population sizes this crate generates (tens of
/// galaxies, at most eight planets per system) a spatial structure does
/// not pay for itself. For bulk nearest-position lookups over larger
/// populations see [`crate::SpatialIndex`].
///
/// # Example
///
/// ```
/// use cosmogen::{find_neighbors, Galaxy};
///
/// let population: Vec<Galaxy> = (0..8).map(|i| Galaxy::generate(1, i)).collect();
/// let neighbors = find_neighbors(&population[0], &population, 600.0);
/// for hit in &neighbors {
///     assert!(hit.distance <= 600.0);
///     assert_ne!(hit.entity.id, population[0].id);
/// }
/// ```
pub fn find_neighbors<'a, T: Locatable>(
    target: &T,
    population: &'a [T],
    max_distance: f64,
) -> Vec<Neighbor<'a, T>> {
    let origin = match target.position() {
        Some(position) => position,
        None => return Vec::new(),
    };

    population
        .iter()
        .filter(|candidate| candidate.ident() != target.ident())
        .filter_map(|candidate| {
            let distance = origin.distance(candidate.position()?);
            (distance <= max_distance).then_some(Neighbor {
                entity: candidate,
                distance,
            })
        })
        .collect()
}
