//! Calculator configuration.
//!
//! Every field has a default, so a JSON document only needs the keys it
//! wants to override: `{"iterations": 50000, "seed": 42}`.

use serde::{Deserialize, Serialize};

pub const DEFAULT_ITERATIONS: u32 = 25_000;
pub const DEFAULT_BATCH_ITERATIONS: u32 = 10_000;
pub const DEFAULT_RANGE_ITERATIONS: u32 = 10_000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquityConfig {
    /// Trials for a single hand-vs-hand query.
    pub iterations: u32,
    /// Trials per pair in a batch.
    pub batch_iterations: u32,
    /// Trials per opponent combination in a range query.
    pub range_iterations: u32,
    /// Master seed. `None` draws fresh entropy for every call.
    pub seed: Option<u64>,
    /// Size of a dedicated batch pool. `None` uses rayon's global pool.
    pub workers: Option<usize>,
}

impl Default for EquityConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            batch_iterations: DEFAULT_BATCH_ITERATIONS,
            range_iterations: DEFAULT_RANGE_ITERATIONS,
            seed: None,
            workers: None,
        }
    }
}

impl EquityConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(EquityConfig::from_json("{}").unwrap(), EquityConfig::default());
    }

    #[test]
    fn partial_document_overrides_only_given_keys() {
        let config = EquityConfig::from_json(r#"{"iterations": 500, "seed": 9}"#).unwrap();
        assert_eq!(config.iterations, 500);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.batch_iterations, DEFAULT_BATCH_ITERATIONS);
        assert_eq!(config.range_iterations, DEFAULT_RANGE_ITERATIONS);
        assert_eq!(config.workers, None);
    }

    #[test]
    fn batch_iterations_key_is_read() {
        let config = EquityConfig::from_json(r#"{"batch_iterations": 750}"#).unwrap();
        assert_eq!(config.batch_iterations, 750);
        assert_eq!(config.iterations, DEFAULT_ITERATIONS);
        assert_eq!(EquityConfig::default().batch_iterations, 10_000);
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(EquityConfig::from_json(r#"{"iterations": "many"}"#).is_err());
    }
}
