//! Non-recursive directory listing with stable file ordering.

use std::path::{Path, PathBuf};

use jwalk::WalkDir;

use aligndiff_core::CompareError;

/// The regular files of one directory, in a stable sorted order.
///
/// The index of a path here is the index used throughout classification
/// and reporting, so the order must not change between the listing and
/// the content reads.
#[derive(Debug, Clone)]
pub struct DirectoryListing {
    root: PathBuf,
    paths: Vec<PathBuf>,
}

impl DirectoryListing {
    /// Enumerate the regular files directly under `root` (non-recursive).
    ///
    /// Fails if `root` is not a directory. Entries are sorted by path so
    /// the index-to-path mapping is reproducible across runs.
    pub fn load(root: impl AsRef<Path>) -> Result<Self, CompareError> {
        let root = root
            .as_ref()
            .canonicalize()
            .map_err(|e| CompareError::io(root.as_ref(), e))?;

        if !root.is_dir() {
            return Err(CompareError::NotADirectory { path: root });
        }

        let mut paths = Vec::new();
        for entry in WalkDir::new(&root).min_depth(1).max_depth(1).sort(true) {
            let entry = entry.map_err(|e| {
                let path = e.path().map(|p| p.to_path_buf()).unwrap_or_else(|| root.clone());
                match e.io_error() {
                    Some(io) => CompareError::io(path, std::io::Error::new(io.kind(), io.to_string())),
                    None => CompareError::Io {
                        path,
                        source: std::io::Error::other(e.to_string()),
                    },
                }
            })?;
            if entry.file_type().is_file() {
                paths.push(entry.path());
            }
        }

        tracing::debug!(root = %root.display(), files = paths.len(), "listed directory");

        Ok(Self { root, paths })
    }

    /// The canonicalized directory root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The listed file paths, in index order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Number of listed files.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the directory holds no regular files.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Read every listed file's full contents, in index order.
    ///
    /// A file that disappeared or became unreadable since the listing
    /// aborts the run; a partial diff report is not meaningful.
    pub fn read_contents(&self) -> Result<Vec<Vec<u8>>, CompareError> {
        self.paths
            .iter()
            .map(|path| std::fs::read(path).map_err(|e| CompareError::io(path, e)))
            .collect()
    }
}
