//! Spatial indexing for bulk position lookups
//!
//! This module is only available with the `spatial-index` feature.
//!
//! [`crate::find_neighbors`] stays a linear scan because its output order
//! is contractual. The index here is an additional surface for callers
//! that run many nearest-position lookups over a large generated
//! population (for example mapping camera focus points back to galaxies).

#[cfg(feature = "spatial-index")]
use glam::DVec3;
#[cfg(feature = "spatial-index")]
use kiddo::immutable::float::kdtree::ImmutableKdTree;
#[cfg(feature = "spatial-index")]
use kiddo::SquaredEuclidean;

/// KD-tree over entity positions
///
/// Built once from a snapshot of positions; queries return indices into
/// the slice the index was built from.
#[cfg(feature = "spatial-index")]
#[derive(Clone)]
pub struct SpatialIndex {
    tree: ImmutableKdTree<f64, u64, 3, 32>,
}

#[cfg(feature = "spatial-index")]
impl SpatialIndex {
    /// Build an index from entity positions
    ///
    /// # Example
    ///
    /// ```
    /// use cosmogen::{Galaxy, SpatialIndex};
    ///
    /// let galaxies: Vec<Galaxy> = (0..16).map(|i| Galaxy::generate(1, i)).collect();
    /// let positions: Vec<_> = galaxies.iter().map(|g| g.position).collect();
    /// let index = SpatialIndex::new(&positions);
    /// assert_eq!(index.find_nearest(galaxies[3].position), 3);
    /// ```
    pub fn new(positions: &[DVec3]) -> Self {
        let points: Vec<[f64; 3]> = positions.iter().map(|p| [p.x, p.y, p.z]).collect();
        Self {
            tree: ImmutableKdTree::new_from_slice(&points),
        }
    }

    /// Index of the position nearest to `position`
    pub fn find_nearest(&self, position: DVec3) -> usize {
        let query = [position.x, position.y, position.z];
        self.tree.nearest_one::<SquaredEuclidean>(&query).item as usize
    }

    /// All indexed positions within `max_distance` of `position`
    ///
    /// Unlike [`crate::find_neighbors`], results are sorted by distance
    /// and the queried position itself is included when indexed.
    pub fn within(&self, position: DVec3, max_distance: f64) -> Vec<(usize, f64)> {
        let query = [position.x, position.y, position.z];
        self.tree
            .within::<SquaredEuclidean>(&query, max_distance * max_distance)
            .into_iter()
            .map(|hit| (hit.item as usize, hit.distance.sqrt()))
            .collect()
    }
}
