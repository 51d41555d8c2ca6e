//! Analysis engine for aligndiff.
//!
//! This crate provides the two halves of the comparison pipeline:
//!
//! - **Correlation engine** - for a (text, pattern) pair, the maximum
//!   number of position-wise equal characters over all alignment shifts,
//!   computed with one FFT convolution per alphabet symbol instead of the
//!   naive O(n·m) scan.
//! - **Pairwise classifier** - drives the engine over the cross product
//!   of two collections and partitions pairs into identical, similar,
//!   and neither.
//!
//! # Scoring
//!
//! ```rust
//! use aligndiff_analyze::{Alphabet, alignment_score};
//!
//! let score = alignment_score(b"xxabcxx", b"abc", &Alphabet::printable_ascii());
//! assert_eq!(score, 3); // best shift overlays the pattern at offset 2
//! ```
//!
//! # Classification
//!
//! ```rust
//! use aligndiff_analyze::Classifier;
//!
//! let first = vec![b"abcd".to_vec()];
//! let second = vec![b"abXd".to_vec()];
//!
//! let result = Classifier::new(0.5).classify(&first, &second);
//! assert_eq!(result.similar.len(), 1);
//! assert_eq!(result.similar[0].similarity, 75.0);
//! ```

mod classify;
mod correlate;
pub mod fft;

pub use classify::Classifier;
pub use correlate::alignment_score;

// Re-export core types
pub use aligndiff_core::{Alphabet, ClassificationResult, ClassifyConfig, PairScore};
