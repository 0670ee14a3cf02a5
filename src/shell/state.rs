//! Shell states, actions and transitions

use crate::engine::{DatasetOutput, DatasetPipeline, DatasetSource};
use crate::output::DownloadBlob;
use crate::types::Dataset;
use std::path::Path;
use tracing::{info, warn};

/// What the page is currently showing
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ShellState {
    /// Nothing generated yet
    #[default]
    Idle,
    /// A generated dataset is on screen
    Displaying {
        /// The dataset
        output: DatasetOutput,
        /// Success message, if the last action produced one
        message: Option<String>,
        /// Download link payload
        download: Option<DownloadBlob>,
    },
    /// The last action failed
    ErrorShown {
        /// Display text of the error
        message: String,
    },
}

impl ShellState {
    /// Check if this state shows an error
    pub fn is_error(&self) -> bool {
        matches!(self, ShellState::ErrorShown { .. })
    }

    /// The displayed dataset, if any
    pub fn output(&self) -> Option<&DatasetOutput> {
        match self {
            ShellState::Displaying { output, .. } => Some(output),
            _ => None,
        }
    }

    /// Status line text, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            ShellState::Displaying { message, .. } => message.as_deref(),
            ShellState::ErrorShown { message } => Some(message),
            ShellState::Idle => None,
        }
    }

    fn error(err: impl std::fmt::Display) -> Self {
        let message = err.to_string();
        warn!("Shell action failed: {}", message);
        ShellState::ErrorShown { message }
    }
}

/// A user interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    /// Fetch and display a dataset
    Generate { dataset: Dataset, season: i32 },
    /// Write a dataset to its CSV file
    Save { dataset: Dataset, season: i32 },
    /// Clear the page
    Reset,
}

/// The interactive shell: one pipeline plus the transition function
#[derive(Debug)]
pub struct Shell<S> {
    pipeline: DatasetPipeline<S>,
}

impl<S: DatasetSource> Shell<S> {
    /// Create a shell around a pipeline
    pub fn new(pipeline: DatasetPipeline<S>) -> Self {
        Self { pipeline }
    }

    /// Get the pipeline
    pub fn pipeline(&self) -> &DatasetPipeline<S> {
        &self.pipeline
    }

    /// Apply `action` to `state`
    ///
    /// Errors never escape: they become [`ShellState::ErrorShown`].
    /// `Save` writes the displayed table when it is the requested dataset
    /// and season; otherwise it fetches first.
    pub async fn handle(&self, state: ShellState, action: ShellAction) -> ShellState {
        match action {
            ShellAction::Reset => ShellState::Idle,
            ShellAction::Generate { dataset, season } => {
                match self.pipeline.generate(dataset, season).await {
                    Ok(output) => self.display(output, None),
                    Err(e) => ShellState::error(e),
                }
            }
            ShellAction::Save { dataset, season } => {
                let output = match state {
                    ShellState::Displaying { output, .. }
                        if output.dataset == dataset
                            && (!dataset.uses_season() || output.season == season) =>
                    {
                        output
                    }
                    _ => match self.pipeline.generate(dataset, season).await {
                        Ok(output) => output,
                        Err(e) => return ShellState::error(e),
                    },
                };

                match self.pipeline.save(&output) {
                    Ok(path) => {
                        let message = saved_message(&output, &path);
                        info!("{}", message);
                        self.display(output, Some(message))
                    }
                    Err(e) => ShellState::error(e),
                }
            }
        }
    }

    fn display(&self, output: DatasetOutput, message: Option<String>) -> ShellState {
        // An empty table has nothing to download
        let download = match self.pipeline.download(&output) {
            Ok(blob) => Some(blob),
            Err(e) => {
                warn!("No download link for {}: {}", output.dataset, e);
                None
            }
        };
        ShellState::Displaying {
            output,
            message,
            download,
        }
    }
}

fn saved_message(output: &DatasetOutput, path: &Path) -> String {
    match output.dataset {
        Dataset::SeasonResults => {
            format!("Dataset downloaded successfully for {}", output.season)
        }
        Dataset::Drivers | Dataset::Season => format!("Data saved to {}", path.display()),
    }
}
