//! Dice notation
//!
//! Parses compact roll strings such as `3d6+2`, `10:20` or `3:4d6` into a [`RollSpec`] and
//! evaluates them against a generator.
//!
//! # Tolerance policy
//!
//! Input that does not match the grammar rolls 0 instead of failing. Only arithmetic faults
//! (division by zero, overflow), out-of-range literals and invalid distribution arguments are
//! reported as errors.

mod config;
mod evaluator;
mod notation;
mod roller;

pub use config::{ConfigError, GeneratorKind, RollerConfig};
pub use evaluator::{apply_operator, evaluate};
pub use notation::{Operator, RollMode, RollSpec};
pub use roller::{share_rng, DiceRoller, SharedRng};

use crate::rng::RngError;
use thiserror::Error;

/// Errors raised while parsing or evaluating dice notation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiceError {
    /// Notation did not match the grammar. Strict parsing reports this; rolling absorbs it as 0.
    #[error("Notation does not match the dice grammar: {0:?}")]
    NoMatch(String),

    #[error("Numeric literal out of range: {0}")]
    LiteralOutOfRange(String),

    #[error("Division by zero in dice notation")]
    DivisionByZero,

    #[error("Integer overflow in dice arithmetic")]
    Overflow,

    #[error("Random draw failed: {0}")]
    Rng(#[from] RngError),
}
