//! Randomness capabilities
//!
//! [`RandomSource`] only requires `next_u64`; every other draw is a provided method built on it,
//! so any generator that implements the raw step gets identical derived behavior.

use super::{RngError, SplitMix64};
use log::debug;
use rand_core::RngCore;

/// A source of uniformly distributed 64-bit draws
pub trait RandomSource {
    /// Advance the generator by one step and return the raw 64-bit output
    fn next_u64(&mut self) -> u64;

    /// Low `bits` bits (at most 32) of one draw, as a signed 32-bit integer
    ///
    /// Always consumes exactly one draw, even for `bits == 0`.
    fn next_bits(&mut self, bits: u32) -> i32 {
        let bits = bits.min(32);
        let mask = if bits == 0 { 0 } else { u64::MAX >> (64 - bits) };
        (self.next_u64() & mask) as u32 as i32
    }

    /// Uniform integer in `[0, bound)`
    ///
    /// # Errors
    /// [`RngError::InvalidBound`] if `bound <= 0`.
    fn next_int(&mut self, bound: i32) -> Result<i32, RngError> {
        // value < bound <= i32::MAX, so the narrowing is lossless
        self.next_long(i64::from(bound)).map(|value| value as i32)
    }

    /// Uniform integer in `[0, bound)` without modulo bias
    ///
    /// Uses the upper 63 bits of a draw and rejects the final partial block: a candidate is
    /// retried while `bits - value + (bound - 1)` would overflow.
    ///
    /// # Errors
    /// [`RngError::InvalidBound`] if `bound <= 0`.
    fn next_long(&mut self, bound: i64) -> Result<i64, RngError> {
        if bound <= 0 {
            return Err(RngError::InvalidBound(bound));
        }

        loop {
            let bits = (self.next_u64() >> 1) as i64;
            let value = bits % bound;
            if (bits - value).checked_add(bound - 1).is_some() {
                return Ok(value);
            }
        }
    }

    /// Uniform `f64` in `[0.0, 1.0)` from the low 53 bits of one draw
    fn next_double(&mut self) -> f64 {
        (self.next_u64() & ((1u64 << 53) - 1)) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform `f32` in `[0.0, 1.0)` from the low 24 bits of one draw
    fn next_float(&mut self) -> f32 {
        (self.next_u64() & ((1u64 << 24) - 1)) as f32 * (1.0 / (1u32 << 24) as f32)
    }

    /// True iff the draw is negative when read as `i64`
    fn next_boolean(&mut self) -> bool {
        (self.next_u64() as i64) < 0
    }

    /// Fill `dest` with random bytes
    ///
    /// The buffer is filled from its end in 8-byte chunks, one draw per chunk, each written
    /// most-significant byte first. When the length is not a multiple of 8 the leading partial
    /// chunk receives the low bytes of one further draw.
    fn next_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.rchunks_mut(8) {
            let bytes = self.next_u64().to_be_bytes();
            chunk.copy_from_slice(&bytes[8 - chunk.len()..]);
        }
    }

    /// Convert into a single-word stateful generator
    ///
    /// Stateful generators return themselves. Any other source draws one value and seeds a fresh
    /// [`SplitMix64`] with it; from then on the wrapper and the original source are decoupled.
    fn into_stateful(mut self: Box<Self>) -> Box<dyn StatefulRandom> {
        let seed = self.next_u64();
        debug!(
            "seeding fork: {} lacks state capability, wrapping in SplitMix64",
            std::any::type_name::<Self>()
        );
        Box::new(SplitMix64::new(seed))
    }
}

/// A generator whose entire state is one 64-bit word
///
/// `set_state(state())` never changes the future sequence.
pub trait StatefulRandom: RandomSource {
    /// Opaque state token
    fn state(&self) -> u64;

    /// Overwrite the state with a previously captured token
    fn set_state(&mut self, state: u64);

    /// Detached copy with identical state
    fn copy_stateful(&self) -> Box<dyn StatefulRandom>;
}

/// Adapts any `rand_core::RngCore` generator as a [`RandomSource`]
///
/// The adapter has no state capability, so handing it to a roller goes through the seeding fork.
///
/// # Example
/// ```
/// use dicerng_core::rng::{RngCoreSource, StatefulRng, XorShift128Plus};
///
/// let source = RngCoreSource::new(XorShift128Plus::new(7));
/// let mut rng = StatefulRng::from_source(source);
/// let _ = rng.next_u64();
/// ```
#[derive(Debug, Clone)]
pub struct RngCoreSource<R> {
    inner: R,
}

impl<R: RngCore> RngCoreSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: RngCore> RandomSource for RngCoreSource<R> {
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }
}
