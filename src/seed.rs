//! Seed derivation and boundary parsing
//!
//! Every level of the universe hierarchy derives its children's seeds from
//! its own seed and a context label. The derivation is a plain FNV-1a hash
//! of the label XORed with the parent seed, so a child can be regenerated
//! from `(parent_seed, label)` alone without touching its siblings.

use crate::error::{Result, UniverseError};

/// FNV-1a 64-bit offset basis
const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;

/// FNV-1a 64-bit prime
const FNV_PRIME: u64 = 0x100000001b3;

/// Derive a child seed from a parent seed and a context label
///
/// Computes the FNV-1a hash of `context` (byte-wise, wrapping 64-bit
/// arithmetic) and XORs it with `seed`. Identical `(seed, context)` pairs
/// always yield the identical derived seed on every platform; distinct
/// contexts give well-diffused (though not collision-free) seeds.
///
/// # Example
///
/// ```
/// use cosmogen::derive_seed;
///
/// let a = derive_seed(1, "systems");
/// let b = derive_seed(1, "systems");
/// assert_eq!(a, b);
/// assert_ne!(a, derive_seed(1, "planets"));
/// ```
pub fn derive_seed(seed: u64, context: &str) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in context.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    seed ^ hash
}

/// Parse an externally supplied seed string (URL parameter, CLI flag)
///
/// Accepts a decimal or `0x`-prefixed hexadecimal 64-bit unsigned integer.
/// This is the only place seed validation happens; generators assume their
/// seeds are already well-formed.
///
/// # Errors
///
/// Returns [`UniverseError::InvalidSeed`] for anything that is not a
/// 64-bit unsigned integer (negative numbers, fractions, junk, overflow).
///
/// # Example
///
/// ```
/// use cosmogen::parse_seed;
///
/// assert_eq!(parse_seed("42").unwrap(), 42);
/// assert_eq!(parse_seed("0xff").unwrap(), 255);
/// assert!(parse_seed("-1").is_err());
/// assert!(parse_seed("1.5").is_err());
/// ```
pub fn parse_seed(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse::<u64>(),
    };
    parsed.map_err(|_| {
        UniverseError::InvalidSeed(format!(
            "expected a 64-bit unsigned integer, got {:?}",
            input
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_seed_pinned_value() {
        // Anchor value for cross-implementation compatibility. If this
        // changes, every generated universe changes with it.
        assert_eq!(derive_seed(1, "systems"), 1719280309806354172);
    }

    #[test]
    fn test_derive_seed_deterministic() {
        assert_eq!(derive_seed(12345, "plates"), derive_seed(12345, "plates"));
        assert_eq!(derive_seed(0, ""), derive_seed(0, ""));
    }

    #[test]
    fn test_derive_seed_context_diffusion() {
        let base = derive_seed(99, "radius");
        assert_ne!(base, derive_seed(99, "density"));
        assert_ne!(base, derive_seed(99, "atmosphere"));
        assert_ne!(base, derive_seed(98, "radius"));
    }

    #[test]
    fn test_derive_seed_empty_context() {
        // Empty context degenerates to seed XOR offset-basis
        assert_eq!(derive_seed(0, ""), FNV_OFFSET_BASIS);
    }

    #[test]
    fn test_parse_seed_decimal() {
        assert_eq!(parse_seed("0").unwrap(), 0);
        assert_eq!(parse_seed("42").unwrap(), 42);
        assert_eq!(parse_seed(" 7 ").unwrap(), 7);
        assert_eq!(parse_seed("18446744073709551615").unwrap(), u64::MAX);
    }

    #[test]
    fn test_parse_seed_hex() {
        assert_eq!(parse_seed("0x2a").unwrap(), 42);
        assert_eq!(parse_seed("0XFF").unwrap(), 255);
    }

    #[test]
    fn test_parse_seed_rejects_malformed() {
        assert!(parse_seed("").is_err());
        assert!(parse_seed("-1").is_err());
        assert!(parse_seed("1.5").is_err());
        assert!(parse_seed("banana").is_err());
        // One past u64::MAX overflows
        assert!(parse_seed("18446744073709551616").is_err());
    }
}
