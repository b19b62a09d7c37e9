//! Raw pseudo-random bit engine
//!
//! This module provides the deterministic word source underlying every
//! generator in the crate.
//!
//! It is built around a from-scratch MT19937-64 implementation (the 64-bit
//! Mersenne Twister of Matsumoto and Nishimura) and exposes a bit-stream
//! view for consumers that need individual bits rather than whole words.

/// Design goals:
/// - Bit-for-bit agreement with the published MT19937-64 reference output
/// - Deterministic expansion from a 64-bit seed
/// - No heap allocation
/// - Minimal and explicit API surface
mod bits;
mod mt64;

/// Bit-stream view over an engine's word output.
pub use bits::BitStream;

/// 64-bit Mersenne Twister engine.
///
/// This type is the single source of randomness for the crate and the
/// primary entry point for callers that need raw 64-bit words.
pub use mt64::Mt19937_64;
