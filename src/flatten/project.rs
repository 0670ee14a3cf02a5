//! Projection of raw records onto an inferred schema

use super::row::FlatRow;
use crate::schema::{detect_drift, InferredSchema};
use serde_json::Value;
use tracing::warn;

/// Render one JSON value as a cell
///
/// Strings are copied verbatim, null becomes empty, booleans are written
/// `True`/`False`, and everything else uses its JSON text.
pub fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        other => other.to_string(),
    }
}

/// One row per record holding exactly the schema's fields, in schema order
///
/// Missing keys become empty cells. Keys the schema does not know are
/// dropped, and values whose type disagrees with the schema are kept as
/// they are; both cases are logged once per batch.
pub fn project_records(records: &[Value], schema: &InferredSchema) -> Vec<FlatRow> {
    let drift = detect_drift(records, schema);
    if !drift.extra_fields.is_empty() {
        warn!(
            "Dropping fields missing from the sample record: {}",
            drift.extra_fields.join(", ")
        );
    }
    if !drift.mismatched_fields.is_empty() {
        warn!(
            "Fields with types differing from the sample record (kept as-is): {}",
            drift.mismatched_fields.join(", ")
        );
    }

    records
        .iter()
        .map(|record| {
            schema
                .field_names()
                .map(|name| {
                    let cell = record.get(name).map(value_to_cell).unwrap_or_default();
                    (name, cell)
                })
                .collect::<FlatRow>()
        })
        .collect()
}
