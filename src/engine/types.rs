//! Pipeline output types

use crate::flatten::FlatTable;
use crate::types::Dataset;

/// A generated dataset, ready to display or export
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetOutput {
    /// Which variant produced it
    pub dataset: Dataset,
    /// Season it was generated for (ignored by `drivers`)
    pub season: i32,
    /// The rows
    pub table: FlatTable,
    /// Raw records fetched (drivers, or races for the season variants)
    pub records_fetched: usize,
    /// Wall time of the fetch and flatten
    pub duration_ms: u64,
}

impl DatasetOutput {
    /// File name the dataset is saved under
    pub fn file_name(&self) -> String {
        self.dataset.file_name(self.season)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.table.len()
    }

    /// One-line summary for status messages
    pub fn summary(&self) -> String {
        format!("Total Records: {}", self.rows())
    }
}
