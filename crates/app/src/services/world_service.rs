//! World service: use-cases for reading and replacing the world document.

use worldstore_domain::error::WorldStoreError;
use worldstore_domain::world::WorldDocument;

use crate::ports::{SaveOutcome, WorldRepository};

/// Application service for the world document.
pub struct WorldService<R> {
    repo: R,
}

impl<R: WorldRepository> WorldService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Return the current world document verbatim.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the document is missing, unreadable,
    /// or not valid JSON.
    pub async fn get_world(&self) -> Result<WorldDocument, WorldStoreError> {
        self.repo.load().await
    }

    /// Back up the current document and replace it with `document`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository. Nothing is
    /// rolled back: a backup written before a failed replace stays in place.
    pub async fn save_world(&self, document: WorldDocument) -> Result<SaveOutcome, WorldStoreError> {
        let summary = document.summary();
        tracing::info!(
            objects = summary.objects,
            spawners = summary.spawners,
            instances = summary.instances,
            sample_ids = ?summary.sample_ids,
            "received world data update"
        );

        let outcome = self.repo.save(&document).await.inspect_err(|err| {
            tracing::error!(error = %err, "failed to save world data");
        })?;

        match &outcome {
            SaveOutcome::Created => {
                tracing::info!("world data saved, no previous document to back up");
            }
            SaveOutcome::BackedUp { previous } => {
                tracing::info!(
                    previous_objects = previous.objects,
                    "world data saved, previous document backed up"
                );
            }
        }
        Ok(outcome)
    }
}
