//! Deterministic random number generation
//!
//! Two generators live here:
//! - [`XorShift128Plus`]: the fast bit generator with a composite (two-word) state.
//! - [`SplitMix64`]: the default single-word stateful generator.
//!
//! Capabilities are expressed as traits. [`RandomSource`] is anything that can produce raw
//! 64-bit draws (and everything derived from them). [`StatefulRandom`] additionally exposes its
//! whole state as one opaque `u64` that can be captured and reapplied.
//!
//! CRITICAL: Same seed → same sequence, bit for bit. Every derived draw is defined in terms of
//! `next_u64`, so reproducibility of the raw stream is reproducibility of everything.

use thiserror::Error;

/// Errors raised by bounded draws and distribution helpers
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RngError {
    #[error("Bound must be positive, got {0}")]
    InvalidBound(i64),

    #[error("Cannot select best {requested} from an empty pool")]
    EmptyPool { requested: i32 },

    #[error("Integer overflow while accumulating rolls")]
    Overflow,

    #[error("Generator state must not be all zero")]
    ZeroState,
}

/// Implements `rand_core::RngCore` for a type that already implements [`RandomSource`].
///
/// `next_u32` is the low 32 bits of one draw, matching [`RandomSource::next_bits`].
macro_rules! impl_rng_core {
    ($ty:ty) => {
        impl rand_core::RngCore for $ty {
            fn next_u32(&mut self) -> u32 {
                $crate::rng::RandomSource::next_bits(self, 32) as u32
            }

            fn next_u64(&mut self) -> u64 {
                $crate::rng::RandomSource::next_u64(self)
            }

            fn fill_bytes(&mut self, dest: &mut [u8]) {
                $crate::rng::RandomSource::next_bytes(self, dest)
            }

            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
                $crate::rng::RandomSource::next_bytes(self, dest);
                Ok(())
            }
        }
    };
}

pub(crate) use impl_rng_core;

mod source;
mod splitmix;
mod stateful;
mod xorshift;

pub use source::{RandomSource, RngCoreSource, StatefulRandom};
pub use splitmix::SplitMix64;
pub use stateful::StatefulRng;
pub use xorshift::{GeneratorState, XorShift128Plus};
