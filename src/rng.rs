//! Deterministic pseudo-random number stream
//!
//! A plain 64-bit linear congruential generator. Not cryptographic, not
//! statistically fancy; its single job is to produce the exact same stream
//! for the exact same seed on every platform, forever. Generated worlds are
//! regenerated rather than stored, so the stream IS the data format.

/// Seeded 64-bit LCG stream
///
/// Two instances constructed with the same seed and advanced the same
/// number of times produce identical sequences. An instance is never
/// shared between sibling generation calls; every generator derives its
/// own seed and owns its own stream.
///
/// # Example
///
/// ```
/// use cosmogen::Lcg64;
///
/// let mut a = Lcg64::new(42);
/// let mut b = Lcg64::new(42);
/// assert_eq!(a.next(), b.next());
/// assert_eq!(a.next_f64(), b.next_f64());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg64 {
    state: u64,
}

impl Lcg64 {
    /// Knuth's MMIX multiplier
    const MULTIPLIER: u64 = 6364136223846793005;
    /// Knuth's MMIX increment
    const INCREMENT: u64 = 1442695040888963407;

    /// Create a stream whose state starts at exactly `seed`
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance the stream and return the new state
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state
    }

    /// Next value in `[0, 1)`, using the top 53 bits of the state
    pub fn next_f64(&mut self) -> f64 {
        (self.next() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Next integer in `[0, max)` (`max == 0` yields 0)
    pub fn next_int(&mut self, max: u32) -> u32 {
        (self.next_f64() * max as f64).floor() as u32
    }
}
