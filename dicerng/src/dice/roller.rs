//! Dice roller
//!
//! [`DiceRoller`] is the surface the application talks to. It holds a [`StatefulRng`] either
//! exclusively or through a [`SharedRng`] handle, and every roll it performs advances that
//! generator.
//!
//! # Sharing
//!
//! A shared handle is `Rc<RefCell<StatefulRng>>`: single threaded, no internal locking, and never
//! cloned implicitly. Rollers sharing a handle interleave their draws in call order, so each
//! sees a non-contiguous slice of the sequence.

use super::{evaluate, DiceError, RollSpec, RollerConfig};
use crate::distribution;
use crate::rng::{RandomSource, StatefulRng};
use log::trace;
use std::cell::RefCell;
use std::rc::Rc;

/// Generator handle shared between several rollers
pub type SharedRng = Rc<RefCell<StatefulRng>>;

/// Wrap a generator in a shared handle
pub fn share_rng(rng: StatefulRng) -> SharedRng {
    Rc::new(RefCell::new(rng))
}

#[derive(Debug)]
enum RngHandle {
    Owned(StatefulRng),
    Shared(SharedRng),
}

/// Rolls dice notation and dice pools
///
/// # Example
/// ```
/// use dicerng_core::dice::DiceRoller;
///
/// let mut roller = DiceRoller::with_seed(42);
/// let token = roller.rng_state();
///
/// let total = roller.roll_group("3d6+2").unwrap();
/// assert!((5..=20).contains(&total));
///
/// roller.set_rng_state(token);
/// assert_eq!(roller.roll_group("3d6+2").unwrap(), total);
///
/// assert_eq!(roller.roll_group("not dice").unwrap(), 0);
/// ```
#[derive(Debug)]
pub struct DiceRoller {
    rng: RngHandle,
}

impl DiceRoller {
    /// Roller owning a default generator seeded with `seed`
    pub fn with_seed(seed: i64) -> Self {
        Self::from_stateful(StatefulRng::new(seed))
    }

    pub fn from_config(config: &RollerConfig) -> Self {
        Self::from_stateful(config.build_rng())
    }

    /// Roller owning `rng`
    pub fn from_stateful(rng: StatefulRng) -> Self {
        Self {
            rng: RngHandle::Owned(rng),
        }
    }

    /// Roller owning a stateful wrapper around `source`
    ///
    /// Sources without the state capability are forked once (see [`StatefulRng::from_source`]).
    pub fn from_source<S: RandomSource + 'static>(source: S) -> Self {
        Self::from_stateful(StatefulRng::from_source(source))
    }

    /// Roller drawing from a generator shared with other holders of `rng`
    pub fn shared(rng: SharedRng) -> Self {
        Self {
            rng: RngHandle::Shared(rng),
        }
    }

    pub fn is_shared(&self) -> bool {
        matches!(self.rng, RngHandle::Shared(_))
    }

    fn with_rng<T>(&mut self, f: impl FnOnce(&mut StatefulRng) -> T) -> T {
        match &mut self.rng {
            RngHandle::Owned(rng) => f(rng),
            RngHandle::Shared(rng) => f(&mut *rng.borrow_mut()),
        }
    }

    // ========================================================================
    // State
    // ========================================================================

    /// Current state token of the underlying generator
    pub fn rng_state(&self) -> u64 {
        match &self.rng {
            RngHandle::Owned(rng) => rng.state(),
            RngHandle::Shared(rng) => rng.borrow().state(),
        }
    }

    /// Restore a state token; for shared handles every holder observes the change
    pub fn set_rng_state(&mut self, state: u64) {
        self.with_rng(|rng| rng.set_state(state));
    }

    /// Detached copy of the underlying generator
    pub fn copy_rng(&self) -> StatefulRng {
        match &self.rng {
            RngHandle::Owned(rng) => rng.copy(),
            RngHandle::Shared(rng) => rng.borrow().copy(),
        }
    }

    // ========================================================================
    // Rolls
    // ========================================================================

    /// Sum of `n` dice with `sides` sides
    pub fn roll_dice(&mut self, n: i32, sides: i32) -> Result<i32, DiceError> {
        Ok(self.with_rng(|rng| distribution::sum_of_dice(rng, n, sides))?)
    }

    /// `n` die results in draw order
    pub fn independent_rolls(&mut self, n: i32, sides: i32) -> Result<Vec<i32>, DiceError> {
        Ok(self.with_rng(|rng| distribution::independent_rolls(rng, n, sides))?)
    }

    /// Uniform integer in `[lo, hi_exclusive)`
    pub fn between(&mut self, lo: i32, hi_exclusive: i32) -> Result<i32, DiceError> {
        Ok(self.with_rng(|rng| distribution::between(rng, lo, hi_exclusive))?)
    }

    /// Roll `dice` dice with `sides` sides and keep the best `n`
    pub fn best_of(&mut self, n: i32, dice: i32, sides: i32) -> Result<i32, DiceError> {
        let mut pool = self.independent_rolls(dice, sides)?;
        self.best_of_pool(n, &mut pool)
    }

    /// Sum of the best `n` values of a precomputed pool; sorts the pool and draws nothing
    pub fn best_of_pool(&self, n: i32, pool: &mut [i32]) -> Result<i32, DiceError> {
        Ok(distribution::best_of_pool(n, pool)?)
    }

    /// Roll `notation` `dice` times and keep the best `n` totals
    ///
    /// Notation that does not match the grammar contributes totals of 0.
    pub fn best_of_group(&mut self, n: i32, dice: i32, notation: &str) -> Result<i32, DiceError> {
        let spec = match parse_tolerant(notation)? {
            Some(spec) => spec,
            None => RollSpec::default(),
        };

        let mut pool = (0..dice.max(0))
            .map(|_| self.roll_spec(&spec))
            .collect::<Result<Vec<_>, _>>()?;
        self.best_of_pool(n, &mut pool)
    }

    /// Evaluate dice notation
    ///
    /// Input that does not match the grammar rolls 0 and draws nothing.
    ///
    /// # Errors
    /// [`DiceError::DivisionByZero`], [`DiceError::Overflow`], [`DiceError::LiteralOutOfRange`]
    /// or an invalid distribution argument wrapped in [`DiceError::Rng`].
    pub fn roll_group(&mut self, notation: &str) -> Result<i32, DiceError> {
        match parse_tolerant(notation)? {
            Some(spec) => self.roll_spec(&spec),
            None => Ok(0),
        }
    }

    /// Evaluate an already parsed roll
    pub fn roll_spec(&mut self, spec: &RollSpec) -> Result<i32, DiceError> {
        self.with_rng(|rng| evaluate(spec, rng))
    }
}

/// Parse, turning a grammar mismatch into `None`
fn parse_tolerant(notation: &str) -> Result<Option<RollSpec>, DiceError> {
    match RollSpec::parse(notation) {
        Ok(spec) => Ok(Some(spec)),
        Err(DiceError::NoMatch(_)) => {
            trace!("dice notation {:?} did not match, rolling 0", notation);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
