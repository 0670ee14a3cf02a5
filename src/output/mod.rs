//! Output module
//!
//! Handles CSV serialization of flat tables.
//!
//! # Overview
//!
//! This module provides utilities for:
//! - Writing tables to a local CSV file (truncating any previous contents)
//! - Encoding tables as base64 CSV download blobs
//! - A single [`export`] entry point choosing between the two

mod download;
mod writer;

pub use download::{DownloadBlob, CSV_MIME};
pub use writer::{table_to_csv, write_csv_file, write_rows_to_csv, write_table};

use crate::error::Result;
use crate::flatten::FlatTable;
use std::path::PathBuf;

/// Where an export goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    /// A CSV file on local disk
    File(PathBuf),
    /// An in-memory blob offered under this file name
    Download(String),
}

/// What an export produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Rows written to a file
    Written { path: PathBuf, rows: usize },
    /// Blob ready to hand to the user
    Download(DownloadBlob),
}

/// Export a table to `target`
pub fn export(table: &FlatTable, target: ExportTarget) -> Result<ExportOutcome> {
    match target {
        ExportTarget::File(path) => {
            let rows = write_csv_file(&path, table)?;
            Ok(ExportOutcome::Written { path, rows })
        }
        ExportTarget::Download(file_name) => {
            Ok(ExportOutcome::Download(DownloadBlob::encode(table, file_name)?))
        }
    }
}
