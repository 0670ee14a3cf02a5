//! Schema types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Coarse column type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Text, and the fallback for anything unclassified
    String,
    /// Whole numbers and booleans
    Integer,
    /// Non-integral numbers
    Float,
}

impl FieldType {
    /// Classify one JSON value
    ///
    /// Booleans count as integers. Null, objects and arrays fall back to
    /// string.
    pub fn of(value: &Value) -> FieldType {
        match value {
            Value::String(_) => FieldType::String,
            Value::Bool(_) => FieldType::Integer,
            Value::Number(n) if n.is_i64() || n.is_u64() => FieldType::Integer,
            Value::Number(_) => FieldType::Float,
            _ => FieldType::String,
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::String => write!(f, "string"),
            FieldType::Integer => write!(f, "integer"),
            FieldType::Float => write!(f, "float"),
        }
    }
}

/// One named field of an inferred schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    /// Key in the sample record
    pub name: String,
    /// Type of the sample value
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

/// Field types taken from a single sample record
///
/// Fields keep the order in which the sample listed them. This is a typing
/// hint, not a contract: other records in the batch are never checked
/// against it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferredSchema {
    /// Fields in sample order
    pub fields: Vec<SchemaField>,
}

impl InferredSchema {
    /// Create a new empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field; a repeated name replaces the earlier type in place
    pub fn add_field(&mut self, name: impl Into<String>, field_type: FieldType) {
        let name = name.into();
        if let Some(existing) = self.fields.iter_mut().find(|f| f.name == name) {
            existing.field_type = field_type;
        } else {
            self.fields.push(SchemaField { name, field_type });
        }
    }

    /// Type of a field
    pub fn get(&self, name: &str) -> Option<FieldType> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.field_type)
    }

    /// Check if a field is part of the schema
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Field names in order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the sample had no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Render as `{"field": "type", ...}` in field order
    pub fn to_json(&self) -> Value {
        let map = self
            .fields
            .iter()
            .map(|f| (f.name.clone(), Value::String(f.field_type.to_string())))
            .collect::<serde_json::Map<_, _>>();
        Value::Object(map)
    }

    /// Convert to pretty JSON string
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
    }
}
