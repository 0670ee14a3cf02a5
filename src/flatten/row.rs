//! Flat output rows and tables

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One output record: ordered column name to string value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatRow {
    cells: Vec<(String, String)>,
}

impl FlatRow {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column; an existing column keeps its position
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        if let Some(cell) = self.cells.iter_mut().find(|(c, _)| *c == column) {
            cell.1 = value;
        } else {
            self.cells.push((column, value));
        }
    }

    /// Builder form of [`FlatRow::insert`]
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(column, value);
        self
    }

    /// Value of a column
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v.as_str())
    }

    /// Column names in insertion order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(c, _)| c.as_str())
    }

    /// (column, value) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(c, v)| (c.as_str(), v.as_str()))
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<C: Into<String>, V: Into<String>> FromIterator<(C, V)> for FlatRow {
    fn from_iter<I: IntoIterator<Item = (C, V)>>(iter: I) -> Self {
        let mut row = FlatRow::new();
        for (c, v) in iter {
            row.insert(c, v);
        }
        row
    }
}

impl Serialize for FlatRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (c, v) in &self.cells {
            map.serialize_entry(c, v)?;
        }
        map.end()
    }
}

/// Rows with a declared column order
///
/// A table built with [`FlatTable::from_rows`] takes its columns from the
/// first row, so an empty table built that way has no columns at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatTable {
    columns: Vec<String>,
    rows: Vec<FlatRow>,
}

impl FlatTable {
    /// Table with an explicit column order
    pub fn with_columns<I, S>(columns: I, rows: Vec<FlatRow>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows,
        }
    }

    /// Table whose columns are the first row's columns
    pub fn from_rows(rows: Vec<FlatRow>) -> Self {
        let columns = rows
            .first()
            .map(|r| r.columns().map(str::to_string).collect())
            .unwrap_or_default();
        Self { columns, rows }
    }

    /// Column names in output order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in output order
    pub fn rows(&self) -> &[FlatRow] {
        &self.rows
    }

    /// Consume the table, keeping its rows
    pub fn into_rows(self) -> Vec<FlatRow> {
        self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// A row's values in column order; missing columns are empty and
    /// columns the table does not declare are left out
    pub fn record<'a>(&'a self, row: &'a FlatRow) -> Vec<&'a str> {
        self.columns
            .iter()
            .map(|c| row.get(c).unwrap_or_default())
            .collect()
    }

    /// Every row as a record, in order
    pub fn records(&self) -> impl Iterator<Item = Vec<&str>> {
        self.rows.iter().map(move |r| self.record(r))
    }
}
