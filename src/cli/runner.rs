//! CLI runner - executes commands

use crate::api::ErgastClient;
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::AppConfig;
use crate::engine::{DatasetOutput, DatasetPipeline};
use crate::error::{Error, Result, ResultExt};
use crate::flatten::FlatTable;
use crate::output::{table_to_csv, write_csv_file};
use crate::types::{max_season, Dataset};
use serde_json::{json, Value};
use std::io::Write;
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;

        match &self.cli.command {
            Commands::Fetch {
                dataset,
                season,
                limit,
            } => {
                self.fetch(&config, *dataset, season.unwrap_or_else(max_season), *limit)
                    .await
            }
            Commands::Export {
                dataset,
                season,
                output,
                download,
            } => {
                self.export(
                    &config,
                    *dataset,
                    season.unwrap_or_else(max_season),
                    output.as_deref(),
                    *download,
                )
                .await
            }
            Commands::Schema => self.schema(&config).await,
            Commands::Serve { port } => {
                crate::cli::serve(&config, port.unwrap_or(config.port)).await
            }
        }
    }

    /// Load configuration and apply command-line overrides
    fn load_config(&self) -> Result<AppConfig> {
        let mut config = AppConfig::load_or_default(self.cli.config.as_deref())?;
        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(output_dir) = &self.cli.output_dir {
            config.output_dir.clone_from(output_dir);
        }
        config.validate()?;
        Ok(config)
    }

    fn pipeline(config: &AppConfig) -> Result<DatasetPipeline<ErgastClient>> {
        let client = ErgastClient::new(config)?;
        Ok(DatasetPipeline::new(client, config.output_dir.clone()))
    }

    /// Fetch a dataset and print its rows
    async fn fetch(
        &self,
        config: &AppConfig,
        dataset: Dataset,
        season: i32,
        limit: Option<usize>,
    ) -> Result<()> {
        let pipeline = Self::pipeline(config)?;
        let output = pipeline.generate(dataset, season).await?;
        let shown = limit.unwrap_or(output.rows());

        match self.cli.format {
            OutputFormat::Csv => {
                let table = FlatTable::with_columns(
                    output.table.columns().iter().cloned(),
                    output.table.rows().iter().take(shown).cloned().collect(),
                );
                let bytes = table_to_csv(&table)?;
                std::io::stdout()
                    .write_all(&bytes)
                    .context("Failed to write CSV to stdout")?;
            }
            OutputFormat::Json => {
                for row in output.table.rows().iter().take(shown) {
                    self.output_message(&json!({
                        "type": "RECORD",
                        "dataset": dataset,
                        "record": row
                    }));
                }
                self.output_message(&summary(&output));
            }
            OutputFormat::Pretty => {
                let rows: Vec<_> = output.table.rows().iter().take(shown).collect();
                self.output_message(&json!(rows));
                self.output_message(&summary(&output));
            }
        }

        Ok(())
    }

    /// Fetch a dataset and write it to a file or a download link
    async fn export(
        &self,
        config: &AppConfig,
        dataset: Dataset,
        season: i32,
        output_path: Option<&Path>,
        download: bool,
    ) -> Result<()> {
        let pipeline = Self::pipeline(config)?;
        let output = pipeline.generate(dataset, season).await?;

        if download {
            let blob = pipeline.download(&output)?;
            println!("{}", blob.to_anchor("Download Dataset"));
            return Ok(());
        }

        let path = match output_path {
            Some(path) => {
                write_csv_file(path, &output.table)?;
                path.to_path_buf()
            }
            None => pipeline.save(&output)?,
        };

        self.output_message(&json!({
            "type": "EXPORT",
            "dataset": dataset,
            "path": path.display().to_string(),
            "rows": output.rows()
        }));
        Ok(())
    }

    /// Print the schema inferred from the first driver record
    async fn schema(&self, config: &AppConfig) -> Result<()> {
        let pipeline = Self::pipeline(config)?;
        let schema = pipeline.drivers_schema().await?;
        if schema.is_empty() {
            return Err(Error::EmptyDataset);
        }

        self.output_message(&json!({
            "type": "SCHEMA",
            "schema": schema.to_json()
        }));
        Ok(())
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json | OutputFormat::Csv => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

fn summary(output: &DatasetOutput) -> Value {
    json!({
        "type": "SUMMARY",
        "dataset": output.dataset,
        "season": output.season,
        "rows": output.rows(),
        "records_fetched": output.records_fetched,
        "duration_ms": output.duration_ms
    })
}
