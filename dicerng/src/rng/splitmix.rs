//! SplitMix64 generator
//!
//! Single 64-bit state advanced by a Weyl sequence, output mixed with two multiply/xor-shift
//! rounds. Every `u64` (zero included) is a valid state, which is what makes it the default
//! stateful generator: its state token is the state itself.

use super::{impl_rng_core, RandomSource, StatefulRandom};
use rand_core::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic single-word generator
///
/// # Example
/// ```
/// use dicerng_core::rng::{SplitMix64, StatefulRandom};
///
/// let mut rng = SplitMix64::new(0);
/// let token = rng.state();
/// let first = rng.next_u64();
///
/// rng.set_state(token);
/// assert_eq!(rng.next_u64(), first);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl RandomSource for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        SplitMix64::next_u64(self)
    }

    fn into_stateful(self: Box<Self>) -> Box<dyn StatefulRandom> {
        self
    }
}

impl StatefulRandom for SplitMix64 {
    fn state(&self) -> u64 {
        self.state
    }

    fn set_state(&mut self, state: u64) {
        self.state = state;
    }

    fn copy_stateful(&self) -> Box<dyn StatefulRandom> {
        Box::new(self.clone())
    }
}

impl_rng_core!(SplitMix64);

impl SeedableRng for SplitMix64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

impl fmt::Display for SplitMix64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SplitMix64{{{:016X}}}", self.state)
    }
}
