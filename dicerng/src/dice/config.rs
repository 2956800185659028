//! Roller configuration
//!
//! Deserializable description of how a [`DiceRoller`](super::DiceRoller) builds its generator.

use crate::rng::{StatefulRng, XorShift128Plus};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading a roller configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid roller config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Which generator a roller is seeded with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeneratorKind {
    /// Single-word stateful generator, seeded directly
    #[default]
    #[serde(rename = "splitmix64")]
    SplitMix64,
    /// xorshift128+ seeded with `seed`, then forked once into a stateful generator
    #[serde(rename = "xorshift128plus")]
    XorShift128Plus,
}

/// Roller construction parameters
///
/// # Example
/// ```
/// use dicerng_core::dice::{GeneratorKind, RollerConfig};
///
/// let config = RollerConfig::from_json(r#"{"seed": 42, "generator": "xorshift128plus"}"#).unwrap();
/// assert_eq!(config.seed, 42);
/// assert_eq!(config.generator, GeneratorKind::XorShift128Plus);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollerConfig {
    /// Seed for the generator
    pub seed: i64,

    pub generator: GeneratorKind,
}

impl RollerConfig {
    pub fn new(seed: i64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the generator this configuration describes
    pub fn build_rng(&self) -> StatefulRng {
        match self.generator {
            GeneratorKind::SplitMix64 => StatefulRng::new(self.seed),
            GeneratorKind::XorShift128Plus => {
                StatefulRng::from_source(XorShift128Plus::new(self.seed))
            }
        }
    }
}
