//! CSV writer
//!
//! Serializes a [`FlatTable`] as comma-separated text with a header row.

use crate::error::{Error, Result};
use crate::flatten::{FlatRow, FlatTable};
use csv::{Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

fn builder() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder.terminator(Terminator::CRLF);
    builder
}

/// Write the header and every record of `table` to `writer`
///
/// Fails with [`Error::EmptyDataset`] when the table has no columns, which
/// is what a table built from zero rows looks like.
pub fn write_table<W: Write>(writer: W, table: &FlatTable) -> Result<usize> {
    if table.columns().is_empty() {
        return Err(Error::EmptyDataset);
    }

    let mut csv = builder().from_writer(writer);
    csv.write_record(table.columns())?;
    for record in table.records() {
        csv.write_record(&record)?;
    }
    csv.flush()?;
    Ok(table.len())
}

/// Serialize a table to CSV bytes in memory
pub fn table_to_csv(table: &FlatTable) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_table(&mut buf, table)?;
    Ok(buf)
}

/// Write a table to `path`, replacing any existing file
pub fn write_csv_file(path: impl AsRef<Path>, table: &FlatTable) -> Result<usize> {
    let path = path.as_ref();
    if table.columns().is_empty() {
        return Err(Error::EmptyDataset);
    }
    let file = File::create(path).map_err(|e| Error::Output {
        message: format!("Failed to create file '{}': {e}", path.display()),
    })?;

    let rows = write_table(file, table)?;
    info!("Wrote {} rows to {}", rows, path.display());
    Ok(rows)
}

/// Write rows to `path` using the first row's columns as the header
pub fn write_rows_to_csv(path: impl AsRef<Path>, rows: Vec<FlatRow>) -> Result<usize> {
    if rows.is_empty() {
        return Err(Error::EmptyDataset);
    }
    write_csv_file(path, &FlatTable::from_rows(rows))
}
