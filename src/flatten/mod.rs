//! Row flattening module
//!
//! Turns nested API records into flat, string-valued rows.
//!
//! # Overview
//!
//! - [`aggregate`] - lookup join of a season's drivers, constructors and races
//! - [`flatten_results`] - rows from the paged results endpoint
//! - [`project_records`] - raw records cut down to an inferred schema
//!
//! No function here fails: absent values become empty strings.

mod aggregate;
mod project;
mod row;

pub use aggregate::{
    aggregate, flatten_results, normalize_date, Lookups, RESULTS_COLUMNS, SEASON_COLUMNS,
};
pub use project::{project_records, value_to_cell};
pub use row::{FlatRow, FlatTable};
