//! Classification result types.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One scored pair of sequences, indexed into the two input collections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairScore {
    /// Index into the first collection.
    pub first: usize,
    /// Index into the second collection.
    pub second: usize,
    /// Similarity as a percentage in `[0, 100]`.
    pub similarity: f64,
}

/// Results from classifying the cross product of two collections.
///
/// Pair lists are ordered ascending by `(first, second)`. Uniqueness is
/// defined against identical matches only: a sequence that is 95% similar
/// to another but never identical to anything is still unique to its side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Pairs whose best alignment covers every position of the longer
    /// sequence (only possible at equal lengths).
    pub identical: Vec<PairScore>,

    /// Pairs at or above the similarity threshold, excluding identical ones.
    pub similar: Vec<PairScore>,

    /// First-collection indices appearing in at least one identical pair.
    pub identical_first: BTreeSet<usize>,

    /// Second-collection indices appearing in at least one identical pair.
    pub identical_second: BTreeSet<usize>,
}

impl ClassificationResult {
    /// First-collection indices with no identical match, in ascending order.
    pub fn unique_first(&self, first_len: usize) -> Vec<usize> {
        (0..first_len)
            .filter(|i| !self.identical_first.contains(i))
            .collect()
    }

    /// Second-collection indices with no identical match, in ascending order.
    pub fn unique_second(&self, second_len: usize) -> Vec<usize> {
        (0..second_len)
            .filter(|j| !self.identical_second.contains(j))
            .collect()
    }

    /// Whether any pair was reported identical or similar.
    pub fn has_matches(&self) -> bool {
        !self.identical.is_empty() || !self.similar.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_complements_identical_sets() {
        let mut result = ClassificationResult::default();
        result.identical.push(PairScore {
            first: 1,
            second: 0,
            similarity: 100.0,
        });
        result.identical_first.insert(1);
        result.identical_second.insert(0);

        assert_eq!(result.unique_first(3), vec![0, 2]);
        assert_eq!(result.unique_second(2), vec![1]);
        assert!(result.has_matches());
    }

    #[test]
    fn test_empty_result() {
        let result = ClassificationResult::default();
        assert_eq!(result.unique_first(2), vec![0, 1]);
        assert!(!result.has_matches());
    }
}
