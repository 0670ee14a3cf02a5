//! Common types used throughout f1-dataset
//!
//! Dataset variants and season bounds.

use crate::error::{Error, Result};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

// ============================================================================
// Seasons
// ============================================================================

/// First championship season
pub const MIN_SEASON: i32 = 1950;

/// Latest season the shell accepts (the current calendar year)
pub fn max_season() -> i32 {
    chrono::Utc::now().year()
}

/// Check a season against `[MIN_SEASON, max_season()]`
pub fn validate_season(season: i32) -> Result<i32> {
    let max = max_season();
    if (MIN_SEASON..=max).contains(&season) {
        Ok(season)
    } else {
        Err(Error::InvalidSeason {
            season,
            min: MIN_SEASON,
            max,
        })
    }
}

// ============================================================================
// Dataset Variants
// ============================================================================

/// Which dataset the pipeline builds
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Dataset {
    /// Every driver, columns inferred from the first record
    Drivers,
    /// Paged race results for one season
    SeasonResults,
    /// Drivers, constructors and races of one season joined into rows
    #[default]
    Season,
}

impl Dataset {
    /// All variants, in display order
    pub const ALL: [Dataset; 3] = [Dataset::Drivers, Dataset::SeasonResults, Dataset::Season];

    /// Whether the dataset depends on the season input
    pub fn uses_season(self) -> bool {
        !matches!(self, Dataset::Drivers)
    }

    /// Output file name for this dataset
    pub fn file_name(self, season: i32) -> String {
        match self {
            Dataset::SeasonResults => format!("f1_dataset_{season}.csv"),
            Dataset::Drivers | Dataset::Season => "f1_dataset.csv".to_string(),
        }
    }

    /// Human-readable title
    pub fn title(self) -> &'static str {
        match self {
            Dataset::Drivers => "F1 Dataset Viewer",
            Dataset::SeasonResults => "F1 Research Dataset Generator",
            Dataset::Season => "Formula 1 Dataset Viewer",
        }
    }

    /// Identifier used in forms and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            Dataset::Drivers => "drivers",
            Dataset::SeasonResults => "season-results",
            Dataset::Season => "season",
        }
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
