//! CLI module
//!
//! Command-line interface for generating datasets.
//!
//! # Commands
//!
//! - `fetch` - Build a dataset and print its rows
//! - `export` - Build a dataset and write it as CSV (or a download link)
//! - `schema` - Infer the drivers schema from its first record
//! - `serve` - Start the interactive page

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
pub use server::{router, serve};
