//! Seeded permutation tables and 3D Perlin lattice evaluation
//!
//! Classic improved Perlin noise, with one twist: instead of Ken Perlin's
//! fixed reference permutation, each seed gets its own table, produced by
//! Fisher–Yates shuffling `[0..255]` with an [`Lcg64`] stream seeded from
//! `derive_seed(seed, "noise")`. Table construction is the expensive part,
//! which is why tables are cached per seed (see [`super::NoiseCache`]).

use crate::rng::Lcg64;
use crate::seed::derive_seed;

/// Permutation tables are the base 256 entries duplicated once, so lattice
/// lookups up to `perm[a] + 255 + 1` never need a range wrap.
pub(crate) const TABLE_LEN: usize = 512;

/// The 12 edge-direction gradients of the unit cube
const GRAD3: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

/// Build the 512-entry permutation table for a seed
///
/// Starts from the identity `[0..255]`, shuffles with a stream seeded from
/// `derive_seed(seed, "noise")` (high index downward, partner drawn with
/// `next_int(i + 1)`), then duplicates the result. The shuffle consumes
/// exactly 255 draws; changing that count would silently re-key every
/// seed's noise field.
pub(crate) fn build_permutation(seed: u64) -> Vec<u8> {
    let mut rng = Lcg64::new(derive_seed(seed, "noise"));
    let mut base: [u8; 256] = core::array::from_fn(|i| i as u8);
    for i in (1..256usize).rev() {
        let j = rng.next_int(i as u32 + 1) as usize;
        base.swap(i, j);
    }
    let mut table = Vec::with_capacity(TABLE_LEN);
    table.extend_from_slice(&base);
    table.extend_from_slice(&base);
    table
}

/// Quintic fade `6t⁵ - 15t⁴ + 10t³`
#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation
#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product of a hashed gradient direction with an offset vector
#[inline]
fn grad(hash: u8, x: f64, y: f64, z: f64) -> f64 {
    let g = GRAD3[hash as usize % 12];
    g[0] * x + g[1] * y + g[2] * z
}

/// Evaluate 3D Perlin noise against a prebuilt permutation table
///
/// Standard lattice evaluation: cell indices via `floor & 255`, fractional
/// offsets, quintic fade, gradient dot products at the 8 cell corners,
/// trilinear interpolation. Output is approximately `[-1, 1]`.
///
/// `table` must have [`TABLE_LEN`] entries; the cache guarantees this.
pub(crate) fn perlin_3d(table: &[u8], x: f64, y: f64, z: f64) -> f64 {
    let xi = (x.floor() as i64 & 255) as usize;
    let yi = (y.floor() as i64 & 255) as usize;
    let zi = (z.floor() as i64 & 255) as usize;

    let xf = x - x.floor();
    let yf = y - y.floor();
    let zf = z - z.floor();

    let u = fade(xf);
    let v = fade(yf);
    let w = fade(zf);

    // Hash the 8 corners of the lattice cell
    let a = table[xi] as usize + yi;
    let aa = table[a] as usize + zi;
    let ab = table[a + 1] as usize + zi;
    let b = table[xi + 1] as usize + yi;
    let ba = table[b] as usize + zi;
    let bb = table[b + 1] as usize + zi;

    let x1 = lerp(
        grad(table[aa], xf, yf, zf),
        grad(table[ba], xf - 1.0, yf, zf),
        u,
    );
    let x2 = lerp(
        grad(table[ab], xf, yf - 1.0, zf),
        grad(table[bb], xf - 1.0, yf - 1.0, zf),
        u,
    );
    let y1 = lerp(x1, x2, v);

    let x1 = lerp(
        grad(table[aa + 1], xf, yf, zf - 1.0),
        grad(table[ba + 1], xf - 1.0, yf, zf - 1.0),
        u,
    );
    let x2 = lerp(
        grad(table[ab + 1], xf, yf - 1.0, zf - 1.0),
        grad(table[bb + 1], xf - 1.0, yf - 1.0, zf - 1.0),
        u,
    );
    let y2 = lerp(x1, x2, v);

    lerp(y1, y2, w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        let table = build_permutation(1);
        assert_eq!(table.len(), TABLE_LEN);
        // Duplicated halves
        assert_eq!(&table[..256], &table[256..]);
        // First half is a permutation of 0..=255
        let mut seen = [false; 256];
        for &v in &table[..256] {
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_table_pinned_prefix() {
        // Anchor the shuffle itself, not just its downstream effects.
        let table = build_permutation(1);
        assert_eq!(&table[..8], &[17, 212, 26, 95, 163, 211, 234, 93]);
    }

    #[test]
    fn test_table_seed_dependence() {
        assert_eq!(build_permutation(5), build_permutation(5));
        assert_ne!(build_permutation(5), build_permutation(6));
    }

    #[test]
    fn test_perlin_pinned_samples() {
        let table = build_permutation(1);
        assert_eq!(perlin_3d(&table, 0.5, 0.5, 0.5), -0.25);
        assert_eq!(perlin_3d(&table, 1.5, 2.3, 0.7), 0.22745354320000033);
        assert_eq!(perlin_3d(&table, 10.25, -3.5, 7.75), 0.55933952331542969);
    }

    #[test]
    fn test_perlin_zero_at_lattice_points() {
        // Every gradient contribution vanishes on the integer lattice.
        let table = build_permutation(99);
        for (x, y, z) in [(0.0, 0.0, 0.0), (1.0, 2.0, 3.0), (-4.0, 0.0, 7.0)] {
            assert_eq!(perlin_3d(&table, x, y, z), 0.0);
        }
    }

    #[test]
    fn test_fade_endpoints() {
        assert_eq!(fade(0.0), 0.0);
        assert_eq!(fade(1.0), 1.0);
        assert_eq!(fade(0.5), 0.5);
    }
}
