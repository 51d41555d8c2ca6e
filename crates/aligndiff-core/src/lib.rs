//! Core types and traits for aligndiff.
//!
//! This crate provides the fundamental data structures shared across
//! the aligndiff ecosystem: the match alphabet, classifier
//! configuration, classification results, and error types.

mod alphabet;
mod config;
mod error;
mod result;

pub use alphabet::Alphabet;
pub use config::{ClassifyConfig, ClassifyConfigBuilder};
pub use error::CompareError;
pub use result::{ClassificationResult, PairScore};
