//! xorshift128+ random number generator
//!
//! Fast, splittable 64-bit generator with 128 bits of state.
//!
//! # Algorithm
//!
//! Seeding runs the raw seed through a MurmurHash3-style avalanche twice so the two state words
//! are decorrelated from the seed and from each other. Each draw performs one xorshift128+ step
//! (shift amounts 23, 17, 26) and returns the wrapping sum of the new second word and the old one.
//!
//! # Determinism
//!
//! The exact operation order below is the contract: any change to shifts, operand order or
//! seeding changes every downstream roll.

use super::{impl_rng_core, RandomSource, RngError};
use rand_core::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Composite generator state
///
/// Never all zero for a generator produced by seeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratorState {
    pub state0: u64,
    pub state1: u64,
}

/// Deterministic xorshift128+ generator
///
/// # Example
/// ```
/// use dicerng_core::rng::{RandomSource, XorShift128Plus};
///
/// let mut rng = XorShift128Plus::new(12345);
/// let mut copy = rng.copy();
/// assert_eq!(rng.next_u64(), copy.next_u64());
///
/// let side = rng.next_int(6).unwrap() + 1;
/// assert!((1..=6).contains(&side));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XorShift128Plus {
    state0: u64,
    state1: u64,
}

/// 64-bit avalanche finalizer used during seeding
fn avalanche(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51_afd7_ed55_8ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    k ^= k >> 33;
    k
}

impl XorShift128Plus {
    /// Create a generator from a seed
    ///
    /// Seed 0 is treated as -1, so `new(0)` and `new(-1)` produce the same sequence.
    pub fn new(seed: i64) -> Self {
        let mut rng = Self {
            state0: 0,
            state1: 0,
        };
        rng.seed(seed);
        rng
    }

    /// Reset the state deterministically from `seed`
    pub fn seed(&mut self, seed: i64) {
        let seed = if seed == 0 { -1 } else { seed };
        self.state0 = avalanche(seed as u64);
        self.state1 = avalanche(self.state0);
    }

    /// Advance one xorshift128+ step
    pub fn next_u64(&mut self) -> u64 {
        let mut s1 = self.state0;
        let s0 = self.state1;
        self.state0 = s0;
        s1 ^= s1 << 23;
        self.state1 = s1 ^ s0 ^ (s1 >> 17) ^ (s0 >> 26);
        self.state1.wrapping_add(s0)
    }

    /// Current composite state (for checkpointing/replay)
    pub fn state(&self) -> GeneratorState {
        GeneratorState {
            state0: self.state0,
            state1: self.state1,
        }
    }

    /// Restore a previously captured state
    ///
    /// # Errors
    /// [`RngError::ZeroState`] if both words are zero; the recurrence would emit zeros forever.
    pub fn set_state(&mut self, state: GeneratorState) -> Result<(), RngError> {
        if state.state0 == 0 && state.state1 == 0 {
            return Err(RngError::ZeroState);
        }
        self.state0 = state.state0;
        self.state1 = state.state1;
        Ok(())
    }

    /// Detached copy; the two generators diverge only once either is drawn from again
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl RandomSource for XorShift128Plus {
    fn next_u64(&mut self) -> u64 {
        XorShift128Plus::next_u64(self)
    }
}

impl_rng_core!(XorShift128Plus);

impl SeedableRng for XorShift128Plus {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(i64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as i64)
    }
}

impl fmt::Display for XorShift128Plus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XorShift128Plus{{{:016X}{:016X}}}", self.state0, self.state1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avalanche_fixes_zero_only() {
        assert_eq!(avalanche(0), 0);
        assert_ne!(avalanche(1), 0);
    }

    #[test]
    fn test_seed_zero_remapped() {
        let rng = XorShift128Plus::new(0);
        assert_eq!(rng.state(), XorShift128Plus::new(-1).state());
        assert_eq!(
            rng.state(),
            GeneratorState {
                state0: 0x64b5_720b_4b82_5f21,
                state1: 0xfa60_5f44_aea3_667d,
            }
        );
    }

    #[test]
    fn test_known_sequence() {
        let mut rng = XorShift128Plus::new(12345);
        assert_eq!(
            rng.state(),
            GeneratorState {
                state0: 0x17d2_abfb_f90b_aef9,
                state1: 0xfc80_cd18_60e2_8208,
            }
        );
        assert_eq!(rng.next_u64(), 0x132f_6335_332e_aa34);
        assert_eq!(rng.next_u64(), 0x7ccc_a835_1573_c78d);
        assert_eq!(rng.next_u64(), 0xe4f7_c083_1c12_f2dc);
    }

    #[test]
    fn test_reseed_resets_sequence() {
        let mut rng = XorShift128Plus::new(5);
        let first = rng.next_u64();
        rng.next_u64();
        rng.seed(5);
        assert_eq!(rng.next_u64(), first);
    }

    #[test]
    fn test_set_state_rejects_zero() {
        let mut rng = XorShift128Plus::new(1);
        let before = rng.state();
        assert_eq!(
            rng.set_state(GeneratorState {
                state0: 0,
                state1: 0
            }),
            Err(RngError::ZeroState)
        );
        assert_eq!(rng.state(), before, "failed restore must leave state untouched");
    }

    #[test]
    fn test_display_is_fixed_width_hex() {
        let rng = XorShift128Plus::new(0);
        assert_eq!(
            rng.to_string(),
            "XorShift128Plus{64B5720B4B825F21FA605F44AEA3667D}"
        );
    }

    #[test]
    fn test_seedable_rng_matches_new() {
        let mut a = XorShift128Plus::seed_from_u64(42);
        let mut b = XorShift128Plus::new(42);
        assert_eq!(a.next_u64(), b.next_u64());

        let mut c = XorShift128Plus::from_seed(42i64.to_le_bytes());
        let mut d = XorShift128Plus::new(42);
        assert_eq!(c.next_u64(), d.next_u64());
    }
}
