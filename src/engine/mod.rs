//! Dataset pipeline module
//!
//! Fetch, reshape and export orchestration.
//!
//! # Overview
//!
//! The engine module provides:
//! - `DatasetSource` - The API calls a pipeline depends on
//! - `DatasetPipeline` - Builds a [`FlatTable`] for each dataset variant
//! - `DatasetOutput` - A generated table plus fetch statistics

mod source;
mod types;

pub use source::DatasetSource;
pub use types::DatasetOutput;

use crate::error::{Error, Result};
use crate::flatten::{
    aggregate, flatten_results, project_records, FlatTable, RESULTS_COLUMNS, SEASON_COLUMNS,
};
use crate::output::{export, DownloadBlob, ExportOutcome, ExportTarget};
use crate::schema::{infer_from_records, InferredSchema};
use crate::types::{validate_season, Dataset};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Builds datasets from a [`DatasetSource`]
#[derive(Debug)]
pub struct DatasetPipeline<S> {
    /// Where records come from
    source: S,
    /// Directory saved files land in
    output_dir: PathBuf,
}

impl<S: DatasetSource> DatasetPipeline<S> {
    /// Create a new pipeline
    pub fn new(source: S, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            output_dir: output_dir.into(),
        }
    }

    /// Get the data source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Directory saved files land in
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Full path a dataset is saved to
    pub fn output_path(&self, dataset: Dataset, season: i32) -> PathBuf {
        self.output_dir.join(dataset.file_name(season))
    }

    /// Fetch and reshape one dataset
    ///
    /// The season is checked against `[1950, current year]` before any
    /// request for the variants that use it.
    pub async fn generate(&self, dataset: Dataset, season: i32) -> Result<DatasetOutput> {
        if dataset.uses_season() {
            validate_season(season)?;
        }

        let start = Instant::now();
        info!("Generating {} dataset (season {})", dataset, season);

        let (table, records_fetched) = match dataset {
            Dataset::Drivers => self.drivers_table().await?,
            Dataset::SeasonResults => self.season_results_table(season).await?,
            Dataset::Season => self.season_table(season).await?,
        };

        let duration_ms = start.elapsed().as_millis() as u64;
        info!(
            "Generated {} rows for {} from {} records in {}ms",
            table.len(),
            dataset,
            records_fetched,
            duration_ms
        );

        Ok(DatasetOutput {
            dataset,
            season,
            table,
            records_fetched,
            duration_ms,
        })
    }

    /// Infer the schema of the drivers endpoint from its first record
    pub async fn drivers_schema(&self) -> Result<InferredSchema> {
        let records = self.source.drivers().await?;
        Ok(infer_from_records(&records))
    }

    async fn drivers_table(&self) -> Result<(FlatTable, usize)> {
        let records = self.source.drivers().await?;
        let schema = infer_from_records(&records);
        let rows = project_records(&records, &schema);
        let table = FlatTable::with_columns(schema.field_names(), rows);
        Ok((table, records.len()))
    }

    async fn season_results_table(&self, season: i32) -> Result<(FlatTable, usize)> {
        let races = self.source.season_results(season).await?;
        if races.is_empty() {
            // A season the API knows nothing about is reported as a failure
            debug!("No races returned for season {}", season);
            return Err(Error::EmptyDataset);
        }
        let rows = flatten_results(&races);
        Ok((FlatTable::with_columns(RESULTS_COLUMNS, rows), races.len()))
    }

    async fn season_table(&self, season: i32) -> Result<(FlatTable, usize)> {
        let drivers = self.source.season_drivers(season).await?;
        let constructors = self.source.season_constructors(season).await?;
        let races = self.source.season_races(season).await?;
        debug!(
            "Season {}: {} drivers, {} constructors, {} races",
            season,
            drivers.len(),
            constructors.len(),
            races.len()
        );

        let rows = aggregate(&drivers, &constructors, &races);
        Ok((FlatTable::with_columns(SEASON_COLUMNS, rows), races.len()))
    }

    /// Write a generated dataset to its file in the output directory
    pub fn save(&self, output: &DatasetOutput) -> Result<PathBuf> {
        let target = ExportTarget::File(self.output_path(output.dataset, output.season));
        match export(&output.table, target)? {
            ExportOutcome::Written { path, .. } => Ok(path),
            ExportOutcome::Download(_) => Err(Error::output("File export produced a download")),
        }
    }

    /// Generate a dataset and save it in one step
    pub async fn generate_and_save(
        &self,
        dataset: Dataset,
        season: i32,
    ) -> Result<(DatasetOutput, PathBuf)> {
        let output = self.generate(dataset, season).await?;
        let path = self.save(&output)?;
        Ok((output, path))
    }

    /// Encode a generated dataset as a download blob
    pub fn download(&self, output: &DatasetOutput) -> Result<DownloadBlob> {
        match export(&output.table, ExportTarget::Download(output.file_name()))? {
            ExportOutcome::Download(blob) => Ok(blob),
            ExportOutcome::Written { .. } => Err(Error::output("Download export wrote a file")),
        }
    }
}

#[cfg(test)]
mod tests;
