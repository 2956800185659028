//! Dice RNG Core - deterministic randomness and dice notation
//!
//! Reproducible pseudo-random generation plus a compact dice-roll notation, for embedding in an
//! interactive application.
//!
//! # Architecture
//!
//! - **rng**: bit generators (xorshift128+, SplitMix64) and the stateful capability
//! - **distribution**: bounded integers, dice sums, pools, best-of selection
//! - **dice**: notation parser, evaluator and the `DiceRoller` surface
//!
//! Data flows one way: rng → distribution → dice.
//!
//! # Critical Invariants
//!
//! 1. Same seed or same state token → same sequence, bit for bit
//! 2. A generator is either owned by one roller or explicitly shared; never implicitly cloned
//! 3. Notation that does not match the grammar rolls 0; arithmetic faults are errors

pub mod dice;
pub mod distribution;
pub mod rng;

// Re-exports for convenience
pub use dice::{
    share_rng, ConfigError, DiceError, DiceRoller, GeneratorKind, Operator, RollMode,
    RollSpec, RollerConfig, SharedRng,
};
pub use rng::{
    GeneratorState, RandomSource, RngCoreSource, RngError, SplitMix64, StatefulRandom,
    StatefulRng, XorShift128Plus,
};
