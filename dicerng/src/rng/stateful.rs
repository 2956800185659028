//! Stateful random source
//!
//! [`StatefulRng`] is what rollers hold: a generator whose full state can be captured as one
//! `u64` token and reapplied later to resume the exact sequence.

use super::{impl_rng_core, RandomSource, SplitMix64, StatefulRandom};
use std::fmt;

/// Snapshot-capable generator handle
///
/// Built either from a seed (default [`SplitMix64`]), from a generator that already has the
/// state capability, or from any other [`RandomSource`]. In the last case one value is drawn
/// from the source to seed a fresh `SplitMix64`, and the two sequences are independent from
/// then on.
///
/// # Example
/// ```
/// use dicerng_core::rng::{StatefulRng, XorShift128Plus};
///
/// let mut rng = StatefulRng::from_source(XorShift128Plus::new(9));
/// let token = rng.state();
/// let a = rng.next_u64();
///
/// rng.set_state(token);
/// assert_eq!(rng.next_u64(), a);
/// ```
pub struct StatefulRng {
    inner: Box<dyn StatefulRandom>,
}

impl StatefulRng {
    /// Seeded default generator
    pub fn new(seed: i64) -> Self {
        Self::from_stateful(SplitMix64::new(seed as u64))
    }

    pub fn from_stateful<S: StatefulRandom + 'static>(rng: S) -> Self {
        Self {
            inner: Box::new(rng),
        }
    }

    /// Wrap any source, forking it once if it lacks the state capability
    pub fn from_source<S: RandomSource + 'static>(source: S) -> Self {
        Self {
            inner: Box::new(source).into_stateful(),
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Opaque state token
    pub fn state(&self) -> u64 {
        self.inner.state()
    }

    pub fn set_state(&mut self, state: u64) {
        self.inner.set_state(state);
    }

    /// Detached copy with identical state
    pub fn copy(&self) -> Self {
        Self {
            inner: self.inner.copy_stateful(),
        }
    }
}

impl RandomSource for StatefulRng {
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn into_stateful(self: Box<Self>) -> Box<dyn StatefulRandom> {
        self.inner
    }
}

impl StatefulRandom for StatefulRng {
    fn state(&self) -> u64 {
        self.inner.state()
    }

    fn set_state(&mut self, state: u64) {
        self.inner.set_state(state);
    }

    fn copy_stateful(&self) -> Box<dyn StatefulRandom> {
        self.inner.copy_stateful()
    }
}

impl_rng_core!(StatefulRng);

impl Clone for StatefulRng {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl fmt::Debug for StatefulRng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatefulRng")
            .field("state", &self.state())
            .finish()
    }
}

/// Diagnostic rendering only; never parsed back
impl fmt::Display for StatefulRng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StatefulRng{{{:016X}}}", self.state())
    }
}
