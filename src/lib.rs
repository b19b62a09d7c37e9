//! Deterministic randomness primitives for Nebula
//!
//! This crate provides seeded, reproducible pseudo-random generation for
//! the Nebula ecosystem: graph construction, simulation replay, fixture
//! generation, and any other place where two independent parties must
//! derive the same "random" choices from a shared seed.
//!
//! The focus is on **determinism, predictability, and auditability**. None
//! of the generators in this crate are cryptographically secure, and none
//! of them try to be: a fixed seed reproduces the full output stream by
//! design. All components are dependency-free, explicit in their
//! semantics, and stable across platforms and releases.
//!
//! # Module overview
//!
//! - `engine`
//!   The raw bit engine: a from-scratch MT19937-64 (64-bit Mersenne
//!   Twister) producing the reference word stream for a given seed, plus
//!   a bit-stream view over its output. This is the single source of
//!   randomness for the rest of the crate.
//!
//! - `uniform`
//!   The bounded-uniform sampling adapter. Maps raw engine words onto an
//!   integer range `[0, bound)` without modulo bias, using a fixed,
//!   documented sampling algorithm so that bounded sequences are as
//!   reproducible as the raw word stream.
//!
//! - `generator`
//!   The high-level entry point. [`generator::RangeGenerator`] owns one
//!   engine and one adapter and yields successive bounded draws. This is
//!   the type most callers should use.
//!
//! # Design goals
//!
//! - Bit-for-bit reproducible output across runs, processes, and platforms
//! - No heap allocations
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//!
//! This crate is not a general statistics toolkit and does not replace
//! full-featured randomness libraries. It is a small, controlled
//! foundation for Nebula's deterministic-generation needs.

pub mod engine;
pub mod generator;
pub mod uniform;
