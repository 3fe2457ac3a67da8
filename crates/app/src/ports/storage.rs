//! Storage port: persistence of the world document.

use std::future::Future;

use worldstore_domain::error::WorldStoreError;
use worldstore_domain::world::{WorldDocument, WorldSummary};

/// What a successful [`WorldRepository::save`] did besides writing the new
/// document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// No document existed yet; nothing was backed up.
    Created,
    /// The previous document was copied to the backup slot first.
    BackedUp {
        /// Summary of the document that was backed up.
        previous: WorldSummary,
    },
}

/// Repository holding the current world document and its single backup.
///
/// Implementations must make `save` behave as: back up the current document
/// (if any), then replace it with `document`. Concurrent saves must not
/// interleave their backup and write steps.
pub trait WorldRepository {
    /// Load the current document.
    fn load(&self) -> impl Future<Output = Result<WorldDocument, WorldStoreError>> + Send;

    /// Back up the current document, then replace it with `document`.
    fn save(
        &self,
        document: &WorldDocument,
    ) -> impl Future<Output = Result<SaveOutcome, WorldStoreError>> + Send;
}

impl<T: WorldRepository + Send + Sync> WorldRepository for std::sync::Arc<T> {
    fn load(&self) -> impl Future<Output = Result<WorldDocument, WorldStoreError>> + Send {
        (**self).load()
    }

    fn save(
        &self,
        document: &WorldDocument,
    ) -> impl Future<Output = Result<SaveOutcome, WorldStoreError>> + Send {
        (**self).save(document)
    }
}
