//! Directory listing and file loading for aligndiff.
//!
//! This crate is the I/O collaborator of the comparison core: it
//! enumerates the regular files directly under a directory (no
//! recursion), keeps a stable index-to-path mapping for reporting, and
//! slurps file contents into memory for the classifier.
//!
//! # Example
//!
//! ```rust,no_run
//! use aligndiff_scan::DirectoryListing;
//!
//! let listing = DirectoryListing::load("/path/to/dir").unwrap();
//! let contents = listing.read_contents().unwrap();
//! assert_eq!(listing.paths().len(), contents.len());
//! ```

mod listing;

pub use listing::DirectoryListing;

// Re-export core types for convenience
pub use aligndiff_core::CompareError;
