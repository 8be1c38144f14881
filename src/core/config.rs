//! Engine configuration.
//!
//! Games configure the engine at startup by providing an `EngineConfig`:
//! - `seed`: RNG seed for tile reveals (`None` draws one from the OS)
//! - `root_rules`: the variants the root-history guard treats as
//!   trivial extensions of an existing word
//!
//! The config is plain data and deserializes from any serde format.

use serde::{Deserialize, Serialize};

use crate::rules::RootRule;

/// Complete engine configuration.
///
/// ```
/// use squabble::core::EngineConfig;
/// use squabble::rules::RootRule;
///
/// let config = EngineConfig::new()
///     .with_seed(7)
///     .with_root_rule(RootRule::suffix("ly"));
///
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.root_rules.len(), RootRule::DEFAULT.len() + 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for the tile RNG. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Rules tested by the root-history guard, in order.
    pub root_rules: Vec<RootRule>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            root_rules: RootRule::DEFAULT.to_vec(),
        }
    }
}

impl EngineConfig {
    /// Create a config with the standard rule table and no fixed seed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the guard's rule table.
    #[must_use]
    pub fn with_root_rules(mut self, rules: Vec<RootRule>) -> Self {
        self.root_rules = rules;
        self
    }

    /// Append one rule to the guard's table.
    #[must_use]
    pub fn with_root_rule(mut self, rule: RootRule) -> Self {
        self.root_rules.push(rule);
        self
    }
}
