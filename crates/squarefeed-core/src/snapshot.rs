//! Loading a persisted [`CatalogSnapshot`] from disk.
//!
//! The scheduled fetch job writes the snapshot as a single JSON document;
//! this is the only file I/O the pipeline depends on. Unlike the
//! transformation itself, a missing or unparseable snapshot IS fatal; there
//! is nothing to degrade to.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::catalog::CatalogSnapshot;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse snapshot {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads and deserializes a catalog snapshot file.
///
/// # Errors
///
/// Returns [`SnapshotError::Io`] when the file cannot be read and
/// [`SnapshotError::Parse`] when it is not a valid snapshot document.
pub fn load_snapshot(path: &Path) -> Result<CatalogSnapshot, SnapshotError> {
    let raw = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SnapshotError::Parse {
        path: path.display().to_string(),
        source,
    })
}
