//! [`WorldRepository`] backed by a JSON file on disk.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::fs;
use tokio::sync::Mutex;

use worldstore_app::ports::{SaveOutcome, WorldRepository};
use worldstore_domain::error::WorldStoreError;
use worldstore_domain::world::WorldDocument;

use crate::codec::to_pretty_bytes;
use crate::error::StorageError;

const BACKUP_SUFFIX: &str = ".bak";
const TEMP_SUFFIX: &str = ".tmp";

/// JSON file repository for the world document.
///
/// The current document lives at `path`, the previous one at `path.bak`.
/// Both are replaced by writing `<target>.tmp` and renaming it over the
/// target, so a reader sees either the old or the new file, never a mix.
/// Saves are serialised through an internal lock; loads are not.
pub struct JsonFileWorldRepository {
    path: PathBuf,
    backup_path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileWorldRepository {
    /// Create a repository for the document at `path`.
    ///
    /// Nothing is touched on disk until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let backup_path = with_suffix(&path, BACKUP_SUFFIX);
        Self {
            path,
            backup_path,
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the current document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the single-generation backup.
    #[must_use]
    pub fn backup_path(&self) -> &Path {
        &self.backup_path
    }

    async fn read_document(&self) -> Result<WorldDocument, StorageError> {
        let bytes = fs::read(&self.path)
            .await
            .map_err(|source| StorageError::Read {
                path: self.path.clone(),
                source,
            })?;
        let value: Value =
            serde_json::from_slice(&bytes).map_err(|source| StorageError::Parse {
                path: self.path.clone(),
                source,
            })?;
        Ok(WorldDocument::new(value))
    }

    async fn ensure_parent_dir(&self) -> Result<(), StorageError> {
        let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) else {
            return Ok(());
        };
        fs::create_dir_all(parent)
            .await
            .map_err(|source| StorageError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })
    }

    async fn save_locked(&self, document: &WorldDocument) -> Result<SaveOutcome, StorageError> {
        self.ensure_parent_dir().await?;

        let outcome = match self.read_document().await {
            Ok(previous) => {
                let summary = previous.summary();
                tracing::debug!(
                    backup = %self.backup_path.display(),
                    objects = summary.objects,
                    "backing up current world document"
                );
                write_atomic(&self.backup_path, previous.as_value()).await?;
                SaveOutcome::BackedUp { previous: summary }
            }
            Err(err) if err.is_not_found() => {
                tracing::debug!(
                    path = %self.path.display(),
                    "no current world document, skipping backup"
                );
                SaveOutcome::Created
            }
            Err(err) => return Err(err),
        };

        write_atomic(&self.path, document.as_value()).await?;
        tracing::info!(path = %self.path.display(), "world document written");
        Ok(outcome)
    }
}

impl WorldRepository for JsonFileWorldRepository {
    async fn load(&self) -> Result<WorldDocument, WorldStoreError> {
        Ok(self.read_document().await?)
    }

    async fn save(&self, document: &WorldDocument) -> Result<SaveOutcome, WorldStoreError> {
        let _guard = self.write_lock.lock().await;
        Ok(self.save_locked(document).await?)
    }
}

/// Replace `target` with the pretty-printed `value` via a temporary sibling.
async fn write_atomic(target: &Path, value: &Value) -> Result<(), StorageError> {
    let bytes = to_pretty_bytes(value).map_err(StorageError::Serialize)?;
    let temp = with_suffix(target, TEMP_SUFFIX);

    fs::write(&temp, bytes)
        .await
        .map_err(|source| StorageError::Write {
            path: temp.clone(),
            source,
        })?;

    if let Err(source) = fs::rename(&temp, target).await {
        if let Err(err) = fs::remove_file(&temp).await {
            tracing::warn!(path = %temp.display(), error = %err, "failed to remove temporary file");
        }
        return Err(StorageError::Rename {
            path: target.to_path_buf(),
            source,
        });
    }
    Ok(())
}

/// `data/world.json` + `.bak` → `data/world.json.bak`.
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}
