//! MT19937-64 core implementation
//!
//! This module provides a low-level, dependency-free implementation of the
//! 64-bit Mersenne Twister (MT19937-64) as published by Matsumoto and
//! Nishimura, the same engine standardized as `mersenne_twister_engine`
//! with the 64-bit parameter set.
//!
//! It is designed to be used as the deterministic word source inside the
//! Nebula ecosystem (e.g. reproducible graph construction, simulation
//! replay), and therefore:
//! - avoids heap allocations
//! - produces bit-identical output on every platform
//! - exposes only minimal, explicit APIs
//!
//! This module **does not** bound or otherwise shape its output. It only
//! produces the raw tempered 64-bit word stream for a seed. Range
//! reduction is built on top of this primitive by the `uniform` module.

/// Degree of recurrence: number of 64-bit words in the engine state.
const NN: usize = 312;

/// Middle offset used by the recurrence.
const MM: usize = 156;

/// The twist matrix constant of the 64-bit parameter set.
const MATRIX_A: u64 = 0xB502_6F5A_A966_19E9;

/// Mask selecting the 33 most significant bits of a state word.
const UPPER_MASK: u64 = 0xFFFF_FFFF_8000_0000;

/// Mask selecting the 31 least significant bits of a state word.
const LOWER_MASK: u64 = 0x0000_0000_7FFF_FFFF;

/// Multiplier of the seed-expansion recurrence.
const INIT_MULTIPLIER: u64 = 6_364_136_223_846_793_005;

/// 64-bit Mersenne Twister engine.
///
/// The engine holds 312 words of state inline and a cursor into the
/// current block. A fixed seed fully determines the output stream: with
/// seed 5489 the first word is `14514284786278117030` and the 10000th is
/// `9981545732273789042`, matching the published reference output.
///
/// The period is 2^19937 - 1; the engine never exhausts and a draw never
/// fails. The state is owned exclusively by the instance and mutation
/// requires `&mut self`, so a single engine cannot be advanced from two
/// threads at once.
#[derive(Clone)]
pub struct Mt19937_64 {
    /// Recurrence state block.
    state: [u64; NN],

    /// Index of the next untempered word within `state`.
    cursor: usize,
}

impl Mt19937_64 {
    /// Creates a new engine from a 64-bit seed.
    ///
    /// The seed is expanded into the full state block using the standard
    /// MT19937-64 initialization recurrence. The cursor is positioned so
    /// that the first draw regenerates the state, exactly as in the
    /// reference implementation.
    pub fn new(seed: u64) -> Self {
        let mut state = [0u64; NN];

        state[0] = seed;
        for i in 1..NN {
            let prev = state[i - 1];
            state[i] = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 62))
                .wrapping_add(i as u64);
        }

        Self { state, cursor: NN }
    }

    /// Returns the next raw 64-bit word and advances the engine by one step.
    pub fn next_u64(&mut self) -> u64 {
        if self.cursor >= NN {
            self.regenerate();
        }

        let mut x = self.state[self.cursor];
        self.cursor += 1;

        // Tempering transform of the 64-bit parameter set.
        x ^= (x >> 29) & 0x5555_5555_5555_5555;
        x ^= (x << 17) & 0x71D6_7FFF_EDA6_0000;
        x ^= (x << 37) & 0xFFF7_EEE0_0000_0000;
        x ^= x >> 43;

        x
    }

    /// Advances the engine as if `n` draws were taken and thrown away.
    pub fn discard(&mut self, n: u64) {
        for _ in 0..n {
            self.next_u64();
        }
    }

    /// Fills the provided buffer with the output word stream.
    ///
    /// Successive raw words are written as little-endian bytes; the final
    /// word is truncated if the buffer length is not a multiple of eight.
    /// The engine advances by one step per started word.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        for chunk in out.chunks_mut(8) {
            let word = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }

    /// Regenerates the full state block (the "twist" step).
    ///
    /// Each state word is recombined from the upper bits of its current
    /// value, the lower bits of its successor, and the word `MM` positions
    /// ahead, with the twist matrix applied to odd intermediates.
    fn regenerate(&mut self) {
        for i in 0..NN {
            let x = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % NN] & LOWER_MASK);

            let mut xa = x >> 1;
            if x & 1 != 0 {
                xa ^= MATRIX_A;
            }

            self.state[i] = self.state[(i + MM) % NN] ^ xa;
        }

        self.cursor = 0;
    }
}

impl From<u64> for Mt19937_64 {
    /// Creates an engine from an integer seed. Equivalent to [`Mt19937_64::new`].
    fn from(seed: u64) -> Self {
        Self::new(seed)
    }
}

impl From<[u8; 8]> for Mt19937_64 {
    /// Creates an engine from a seed given as little-endian bytes.
    ///
    /// This is the natural constructor when the seed is carved out of a
    /// larger byte string, such as the low eight bytes of a hash.
    fn from(seed: [u8; 8]) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }
}
