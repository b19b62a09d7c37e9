//! Seeded bounded generators
//!
//! This module provides the high-level entry point of the crate: a
//! generator that owns a seeded engine and a uniform adapter and yields
//! successive draws in `[0, range)`.
//!
//! It is the type to reach for when a component needs reproducible random
//! indices or weights, e.g. when two parties independently construct the
//! same graph from a shared seed.

mod core;

/// Construction-time error taxonomy for generators.
pub use core::GeneratorError;

/// Seeded generator of uniform draws in `[0, range)`.
///
/// This type is the primary entry point for deterministic bounded
/// randomness within the Nebula codebase.
pub use core::RangeGenerator;
