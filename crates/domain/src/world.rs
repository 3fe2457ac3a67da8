//! World document: the single JSON resource managed by the service.
//!
//! The document is deliberately opaque: it is stored and served verbatim,
//! unknown fields and key order included. Its conventional shape
//! (`objects` with `id`/`instances`, `spawners`) only matters to
//! [`WorldSummary`], which is used for diagnostics.

mod summary;

pub use summary::{SAMPLE_ID_LIMIT, WorldSummary};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;

/// An opaque world document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorldDocument(Value);

impl WorldDocument {
    /// Wrap an already-parsed JSON value without any check.
    ///
    /// Used for documents read back from storage, which may hold any JSON.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parse a submitted request body.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyBody`] when the body is empty or
    /// whitespace only, [`ValidationError::MalformedJson`] when it does not
    /// parse, and [`ValidationError::NotAnObject`] when the top-level value
    /// is not a JSON object.
    pub fn from_submission(body: &[u8]) -> Result<Self, ValidationError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(ValidationError::EmptyBody);
        }
        let value: Value = serde_json::from_slice(body).map_err(ValidationError::MalformedJson)?;
        if !value.is_object() {
            return Err(ValidationError::NotAnObject {
                found: json_type_name(&value),
            });
        }
        Ok(Self(value))
    }

    /// Borrow the underlying JSON value.
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the document and return the underlying JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Compute the diagnostic summary of this document.
    #[must_use]
    pub fn summary(&self) -> WorldSummary {
        WorldSummary::of(&self.0)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
