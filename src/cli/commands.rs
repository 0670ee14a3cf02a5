//! CLI commands and argument parsing

use crate::types::Dataset;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Formula 1 dataset generator CLI
#[derive(Parser, Debug)]
#[command(name = "f1-dataset")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Override the directory CSV files are written to
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a dataset and print its rows
    Fetch {
        /// Dataset to build
        #[arg(short, long, default_value = "season")]
        dataset: Dataset,

        /// Season (ignored by the drivers dataset; defaults to the current year)
        #[arg(short, long)]
        season: Option<i32>,

        /// Maximum rows to print
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Fetch a dataset and write it as CSV
    Export {
        /// Dataset to build
        #[arg(short, long, default_value = "season")]
        dataset: Dataset,

        /// Season (ignored by the drivers dataset; defaults to the current year)
        #[arg(short, long)]
        season: Option<i32>,

        /// Output file (defaults to the dataset's file name in the output directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print a base64 download link instead of writing a file
        #[arg(long)]
        download: bool,
    },

    /// Infer the schema of the drivers endpoint
    Schema,

    /// Start the interactive page
    Serve {
        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
    /// CSV text
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fetch_defaults() {
        let cli = Cli::parse_from(["f1-dataset", "fetch"]);
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(!cli.verbose);
        match cli.command {
            Commands::Fetch {
                dataset,
                season,
                limit,
            } => {
                assert_eq!(dataset, Dataset::Season);
                assert_eq!(season, None);
                assert_eq!(limit, None);
            }
            other => panic!("Expected Fetch, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_export_with_globals_after_subcommand() {
        let cli = Cli::parse_from([
            "f1-dataset",
            "export",
            "--dataset",
            "season-results",
            "--season",
            "2021",
            "--download",
            "-v",
            "--config",
            "f1.yaml",
        ]);

        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("f1.yaml")));
        match cli.command {
            Commands::Export {
                dataset,
                season,
                output,
                download,
            } => {
                assert_eq!(dataset, Dataset::SeasonResults);
                assert_eq!(season, Some(2021));
                assert!(output.is_none());
                assert!(download);
            }
            other => panic!("Expected Export, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_dataset() {
        assert!(Cli::try_parse_from(["f1-dataset", "fetch", "-d", "qualifying"]).is_err());
    }
}
