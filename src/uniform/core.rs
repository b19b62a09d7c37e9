//! Uniform range adapter core implementation
//!
//! The adapter implements Lemire's multiply-shift sampling with rejection,
//! the same strategy GNU libstdc++ uses for 64-bit bounded distributions
//! on targets with 128-bit arithmetic:
//!
//! 1. widen a raw 64-bit word `w` to `product = w * bound` (128-bit),
//! 2. accept unless the low 64 bits of `product` fall below
//!    `2^64 mod bound`, redrawing on rejection,
//! 3. return the high 64 bits of `product`.
//!
//! The high half of the product is `floor(w * bound / 2^64)`, a downscaled
//! copy of `w` into `[0, bound)`; the rejection step trims the raw words
//! that would make some results one draw "too likely". At most
//! `bound - 1` of the 2^64 possible words are rejected, so the expected
//! number of engine steps per sample is barely above one even for bounds
//! near 2^63.

use crate::engine::Mt19937_64;

/// Uniform distribution over `[0, bound)`.
///
/// The adapter is a stateless value: it holds only the bound, never the
/// engine. Identical engines sampled through identical adapters produce
/// identical draws, which keeps bounded output exactly as reproducible as
/// the raw word stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniformU64 {
    /// Exclusive upper bound of the sampled range.
    bound: u64,
}

impl UniformU64 {
    /// Creates an adapter for the range `[0, bound)`.
    ///
    /// Returns `None` when `bound` is zero: a zero-width range admits no
    /// values, so there is nothing to sample.
    pub fn new(bound: u64) -> Option<Self> {
        if bound == 0 {
            return None;
        }

        Some(Self { bound })
    }

    /// Returns the exclusive upper bound of the adapter.
    pub fn bound(&self) -> u64 {
        self.bound
    }

    /// Draws one value in `[0, bound)` from the given engine.
    ///
    /// Consumes one raw word in the common case; additional words are
    /// consumed only when the rejection step discards a draw. A bound of
    /// one always consumes exactly one word and returns zero.
    pub fn sample(&self, engine: &mut Mt19937_64) -> u64 {
        let bound = self.bound as u128;

        let mut product = engine.next_u64() as u128 * bound;

        if (product as u64) < self.bound {
            // 2^64 mod bound, computed without 128-bit division.
            let threshold = self.bound.wrapping_neg() % self.bound;

            while (product as u64) < threshold {
                product = engine.next_u64() as u128 * bound;
            }
        }

        (product >> 64) as u64
    }
}
