//! Diagnostic summary of a world document.

use serde_json::Value;

/// Maximum number of object ids kept in [`WorldSummary::sample_ids`].
pub const SAMPLE_ID_LIMIT: usize = 3;

/// Counts derived from a world document, for logging only.
///
/// Missing or mistyped fields count as empty rather than failing, so any
/// JSON value has a summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldSummary {
    /// Length of the `objects` array.
    pub objects: usize,
    /// Length of the `spawners` array.
    pub spawners: usize,
    /// Sum of the `instances` array lengths across all objects.
    pub instances: usize,
    /// The `id` of the first few objects, in document order.
    pub sample_ids: Vec<String>,
}

impl WorldSummary {
    /// Summarise an arbitrary JSON value.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        let objects = array_field(value, "objects");
        let spawners = array_field(value, "spawners");

        let instances = objects
            .iter()
            .map(|object| array_field(object, "instances").len())
            .sum();

        let sample_ids = objects
            .iter()
            .filter_map(|object| object.get("id"))
            .take(SAMPLE_ID_LIMIT)
            .map(|id| match id {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect();

        Self {
            objects: objects.len(),
            spawners: spawners.len(),
            instances,
            sample_ids,
        }
    }
}

fn array_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map_or(&[], Vec::as_slice)
}
