//! Pairwise classification of two collections of byte sequences.

use rayon::prelude::*;

use aligndiff_core::{ClassificationResult, ClassifyConfig, PairScore};

use crate::correlate::alignment_score;

/// Outcome of scoring a single pair.
enum Outcome {
    Identical(PairScore),
    Similar(PairScore),
    Neither,
}

/// Classifies the cross product of two collections of byte sequences.
pub struct Classifier {
    config: ClassifyConfig,
}

impl Classifier {
    /// Create a classifier with the given similarity threshold and
    /// defaults elsewhere.
    pub fn new(threshold: f64) -> Self {
        Self {
            config: ClassifyConfig::new(threshold),
        }
    }

    /// Create a classifier with a custom config.
    pub fn with_config(config: ClassifyConfig) -> Self {
        Self { config }
    }

    /// Classify every `(i, j)` pair across the two collections.
    ///
    /// Each comparison is independent; with `config.parallel` the cross
    /// product is dispatched over the rayon pool and collected back in
    /// ascending `(i, j)` order, so output ordering matches a sequential
    /// run.
    pub fn classify(&self, first: &[Vec<u8>], second: &[Vec<u8>]) -> ClassificationResult {
        let pairs: Vec<(usize, usize)> = (0..first.len())
            .flat_map(|i| (0..second.len()).map(move |j| (i, j)))
            .collect();

        tracing::debug!(
            first = first.len(),
            second = second.len(),
            comparisons = pairs.len(),
            "classifying cross product"
        );

        let outcomes: Vec<Outcome> = if self.config.parallel {
            pairs
                .par_iter()
                .map(|&(i, j)| self.score_pair(i, j, &first[i], &second[j]))
                .collect()
        } else {
            pairs
                .iter()
                .map(|&(i, j)| self.score_pair(i, j, &first[i], &second[j]))
                .collect()
        };

        let mut result = ClassificationResult::default();
        for outcome in outcomes {
            match outcome {
                Outcome::Identical(pair) => {
                    result.identical_first.insert(pair.first);
                    result.identical_second.insert(pair.second);
                    result.identical.push(pair);
                }
                Outcome::Similar(pair) => result.similar.push(pair),
                Outcome::Neither => {}
            }
        }

        tracing::debug!(
            identical = result.identical.len(),
            similar = result.similar.len(),
            "classification finished"
        );

        result
    }

    /// Score one pair and classify it against the threshold.
    fn score_pair(&self, i: usize, j: usize, a: &[u8], b: &[u8]) -> Outcome {
        let max_size = a.len().max(b.len());

        if max_size == 0 {
            // Both empty: identical by definition, unless configured out.
            return if self.config.empty_files_identical {
                Outcome::Identical(PairScore {
                    first: i,
                    second: j,
                    similarity: 100.0,
                })
            } else {
                Outcome::Neither
            };
        }

        // The engine requires the longer sequence as text.
        let max_common = if a.len() >= b.len() {
            alignment_score(a, b, &self.config.alphabet)
        } else {
            alignment_score(b, a, &self.config.alphabet)
        };

        tracing::trace!(i, j, max_common, max_size, "pair scored");

        if max_common == max_size {
            Outcome::Identical(PairScore {
                first: i,
                second: j,
                similarity: 100.0,
            })
        } else if max_common as f64 >= max_size as f64 * self.config.threshold {
            Outcome::Similar(PairScore {
                first: i,
                second: j,
                similarity: max_common as f64 / max_size as f64 * 100.0,
            })
        } else {
            Outcome::Neither
        }
    }
}
