//! Bounded-uniform sampling
//!
//! This module maps raw engine words onto integer ranges.
//!
//! Taking a raw word modulo a bound is biased whenever the bound does not
//! divide 2^64; the adapter here removes that bias with a fixed rejection
//! scheme, so every value in the target range is exactly equally likely.
//!
//! The sampling algorithm is part of the output contract: bounded
//! sequences are reproducible only if every implementation consumes the
//! engine identically, so the algorithm is fixed, documented, and pinned
//! by regression tests.

mod core;

/// Bias-free uniform adapter over `[0, bound)`.
pub use core::UniformU64;
