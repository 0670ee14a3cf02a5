// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]
#![allow(clippy::format_push_string)]

//! # f1-dataset
//!
//! Builds tabular Formula 1 datasets from an Ergast-compatible statistics
//! API and exports them as CSV.
//!
//! ## Features
//!
//! - **Three Datasets**: all drivers, one season's paged results, or one
//!   season's drivers, constructors and races joined into rows
//! - **Schema Inference**: column types guessed from the first record
//! - **CSV Export**: a local file or a base64 download link
//! - **Interactive Page**: a single form served over HTTP
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use f1_dataset::{AppConfig, Dataset, DatasetPipeline, ErgastClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = AppConfig::default();
//!     let client = ErgastClient::new(&config)?;
//!     let pipeline = DatasetPipeline::new(client, &config.output_dir);
//!
//!     let output = pipeline.generate(Dataset::Season, 2021).await?;
//!     let path = pipeline.save(&output)?;
//!     println!("{} rows written to {}", output.rows(), path.display());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │              Shell (page)  /  CLI (fetch, export)               │
//! │        Generate → Displaying    Save → file    Reset → Idle     │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬───────┴───────┬───────────┬─────────────┐
//! │   HTTP   │    API    │    Schema     │  Flatten  │   Output    │
//! ├──────────┼───────────┼───────────────┼───────────┼─────────────┤
//! │ Timeout  │ Endpoints │ First record  │ Join      │ CSV file    │
//! │ Rate     │ Offset    │ Projection    │ Results   │ Download    │
//! │  limit   │  paging   │ Drift warning │ Dates     │  blob       │
//! └──────────┴───────────┴───────────────┴───────────┴─────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for f1-dataset
pub mod error;

/// Common types and type aliases
pub mod types;

/// Application configuration
pub mod config;

/// HTTP client with timeouts and rate limiting
pub mod http;

/// Pagination strategies
pub mod pagination;

/// Ergast API client
pub mod api;

/// Typed API records
pub mod records;

/// Schema inference from JSON data
pub mod schema;

/// Flat rows, joins and projections
pub mod flatten;

/// CSV output
pub mod output;

/// Dataset pipeline
pub mod engine;

/// Interactive page state machine
pub mod shell;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use api::ErgastClient;
pub use config::AppConfig;
pub use engine::{DatasetOutput, DatasetPipeline, DatasetSource};
pub use flatten::{FlatRow, FlatTable};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
