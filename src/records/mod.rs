//! Records module
//!
//! Typed views over the nested `MRData` documents the API returns.
//!
//! Responses look like `{ "MRData": { "<Table>": { "<List>": [...] } } }`.
//! [`TablePath`] names one of those lists, [`extract_list`] pulls the raw
//! array out, and [`decode_records`] turns it into typed records.

mod types;

pub use types::{Circuit, ConstructorRecord, DriverRecord, Location, RaceRecord, ResultRecord};

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Location of a record list inside an `MRData` document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TablePath {
    /// Table key, e.g. `DriverTable`
    pub table: &'static str,
    /// List key inside the table, e.g. `Drivers`
    pub list: &'static str,
}

impl TablePath {
    /// `MRData.DriverTable.Drivers`
    pub const DRIVERS: TablePath = TablePath {
        table: "DriverTable",
        list: "Drivers",
    };

    /// `MRData.ConstructorTable.Constructors`
    pub const CONSTRUCTORS: TablePath = TablePath {
        table: "ConstructorTable",
        list: "Constructors",
    };

    /// `MRData.RaceTable.Races`
    pub const RACES: TablePath = TablePath {
        table: "RaceTable",
        list: "Races",
    };
}

impl std::fmt::Display for TablePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MRData.{}.{}", self.table, self.list)
    }
}

/// Pull the record array at `path` out of a response body
pub fn extract_list(body: &Value, path: TablePath) -> Result<Vec<Value>> {
    let list = body
        .get("MRData")
        .and_then(|m| m.get(path.table))
        .and_then(|t| t.get(path.list))
        .ok_or_else(|| Error::extraction(path.to_string(), "path not found in response"))?;

    match list {
        Value::Array(items) => Ok(items.clone()),
        other => Err(Error::extraction(
            path.to_string(),
            format!("expected an array, found {}", json_kind(other)),
        )),
    }
}

/// Decode raw records into typed ones
pub fn decode_records<T: DeserializeOwned>(values: Vec<Value>) -> Result<Vec<T>> {
    values
        .into_iter()
        .map(|v| serde_json::from_value(v).map_err(Error::from))
        .collect()
}

/// Extract and decode in one step
pub fn extract_records<T: DeserializeOwned>(body: &Value, path: TablePath) -> Result<Vec<T>> {
    decode_records(extract_list(body, path)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
