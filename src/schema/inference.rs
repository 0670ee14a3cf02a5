//! Schema inference from JSON values

use super::types::{FieldType, InferredSchema};
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

/// Infer a schema from one sample record
///
/// Each top-level field gets the [`FieldType`] of its value. A sample that
/// is not an object yields an empty schema.
pub fn infer_schema(sample: &Value) -> InferredSchema {
    let mut schema = InferredSchema::new();

    if let Value::Object(map) = sample {
        for (key, value) in map {
            schema.add_field(key.clone(), FieldType::of(value));
        }
    }

    schema
}

/// Infer a schema for a batch by looking at its first record only
pub fn infer_from_records(records: &[Value]) -> InferredSchema {
    match records.first() {
        Some(sample) => {
            let schema = infer_schema(sample);
            debug!(
                "Inferred {} fields from 1 of {} records",
                schema.len(),
                records.len()
            );
            schema
        }
        None => InferredSchema::new(),
    }
}

/// How well a batch agrees with a schema inferred from its first record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDrift {
    /// Fields seen in some record but absent from the schema, in first-seen order
    pub extra_fields: Vec<String>,
    /// Fields whose value type differs from the schema somewhere in the batch
    pub mismatched_fields: Vec<String>,
}

impl SchemaDrift {
    /// True when every record matches the schema
    pub fn is_empty(&self) -> bool {
        self.extra_fields.is_empty() && self.mismatched_fields.is_empty()
    }
}

/// Compare every record of a batch against `schema`
///
/// Nulls and missing keys are not counted as mismatches.
pub fn detect_drift(records: &[Value], schema: &InferredSchema) -> SchemaDrift {
    let mut drift = SchemaDrift::default();
    let mut seen_extra = HashSet::new();
    let mut seen_mismatch = HashSet::new();

    for record in records {
        let Value::Object(map) = record else {
            continue;
        };
        for (key, value) in map {
            match schema.get(key) {
                None => {
                    if seen_extra.insert(key.clone()) {
                        drift.extra_fields.push(key.clone());
                    }
                }
                Some(expected) => {
                    if !value.is_null()
                        && FieldType::of(value) != expected
                        && seen_mismatch.insert(key.clone())
                    {
                        drift.mismatched_fields.push(key.clone());
                    }
                }
            }
        }
    }

    drift
}
