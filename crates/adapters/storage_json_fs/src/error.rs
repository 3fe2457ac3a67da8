//! Storage-specific error type wrapping IO and JSON errors.

use std::path::PathBuf;

use worldstore_domain::error::WorldStoreError;

/// Errors originating from the JSON file storage layer.
///
/// Every message carries the underlying IO or parser text, since it is
/// returned to HTTP clients as-is.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The file could not be read (missing, permission denied, …).
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but does not hold valid JSON.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document could not be rendered as JSON.
    #[error("failed to serialize world document: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Writing the temporary file failed.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Renaming the temporary file over its target failed.
    #[error("failed to replace {}: {source}", .path.display())]
    Rename {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document's parent directory could not be created.
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// Whether this error means the file simply does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

impl From<StorageError> for WorldStoreError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
