//! Schema inference module
//!
//! Best-effort column typing from a sample record.
//!
//! # Features
//!
//! - **Type Inference**: string, integer or float per top-level field
//! - **Single Sample**: only the first record of a batch is inspected
//! - **Drift Detection**: reports fields and types later records disagree on

mod inference;
mod types;

pub use inference::{detect_drift, infer_from_records, infer_schema, SchemaDrift};
pub use types::{FieldType, InferredSchema, SchemaField};
