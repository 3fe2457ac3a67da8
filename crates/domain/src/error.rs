//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`WorldStoreError`] via `From`.

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum WorldStoreError {
    /// The submitted document was rejected before touching storage.
    #[error("invalid world document: {0}")]
    Validation(#[from] ValidationError),

    /// Reading or writing the persisted document failed.
    #[error("{0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons a submitted world document is rejected.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The request carried no body at all.
    #[error("request body is empty")]
    EmptyBody,

    /// The body exceeds the configured size limit.
    #[error("request body exceeds the size limit")]
    BodyTooLarge,

    /// The body could not be read from the connection.
    #[error("failed to read request body: {reason}")]
    UnreadableBody {
        /// Text of the underlying transport error.
        reason: String,
    },

    /// The body is not valid JSON.
    #[error("request body is not valid JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    /// The body is valid JSON but not an object.
    #[error("expected a JSON object, found {found}")]
    NotAnObject {
        /// JSON type name of the rejected value.
        found: &'static str,
    },
}
