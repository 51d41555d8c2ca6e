//! Classifier configuration.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;

/// Configuration for pairwise classification.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ClassifyConfig {
    /// Similarity threshold as a fraction in `[0, 1]`. A pair whose best
    /// alignment covers at least this fraction of the longer sequence is
    /// reported as similar (unless it is identical).
    pub threshold: f64,

    /// Symbols eligible for matching.
    #[builder(default)]
    #[serde(default)]
    pub alphabet: Alphabet,

    /// Treat a pair of empty sequences as identical. When false, such a
    /// pair is classified as neither identical nor similar.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub empty_files_identical: bool,

    /// Dispatch comparisons across the rayon thread pool.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub parallel: bool,
}

fn default_true() -> bool {
    true
}

impl ClassifyConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(threshold) = self.threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(format!(
                    "threshold must be a fraction in [0, 1], got {threshold}"
                ));
            }
        } else {
            return Err("threshold is required".to_string());
        }
        Ok(())
    }
}

impl ClassifyConfig {
    /// Create a new config builder.
    pub fn builder() -> ClassifyConfigBuilder {
        ClassifyConfigBuilder::default()
    }

    /// A simple config with the given threshold and defaults elsewhere.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            alphabet: Alphabet::default(),
            empty_files_identical: true,
            parallel: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ClassifyConfig::builder().threshold(0.5).build().unwrap();
        assert_eq!(config.threshold, 0.5);
        assert!(config.empty_files_identical);
        assert!(config.parallel);
        assert_eq!(config.alphabet, Alphabet::printable_ascii());
    }

    #[test]
    fn test_builder_rejects_out_of_range_threshold() {
        assert!(ClassifyConfig::builder().threshold(1.5).build().is_err());
        assert!(ClassifyConfig::builder().threshold(-0.1).build().is_err());
        assert!(ClassifyConfig::builder().build().is_err());
    }
}
