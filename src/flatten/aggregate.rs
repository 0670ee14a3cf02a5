//! Joins of race, result, driver and constructor records into flat rows

use super::row::FlatRow;
use crate::records::{ConstructorRecord, DriverRecord, RaceRecord};
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Columns produced by [`aggregate`]
pub const SEASON_COLUMNS: [&str; 10] = [
    "race_name",
    "circuit",
    "country",
    "date",
    "season",
    "driver",
    "team",
    "nationality",
    "position",
    "points",
];

/// Columns produced by [`flatten_results`]
pub const RESULTS_COLUMNS: [&str; 9] = [
    "Race Name",
    "Round",
    "Date",
    "Circuit",
    "Driver Name",
    "Driver Nationality",
    "Constructor",
    "Position",
    "Points",
];

/// Identifier to record lookups for the join
#[derive(Debug, Default)]
pub struct Lookups<'a> {
    drivers: HashMap<&'a str, &'a DriverRecord>,
    constructors: HashMap<&'a str, &'a ConstructorRecord>,
}

impl<'a> Lookups<'a> {
    /// Index both batches by identifier; a later duplicate replaces an
    /// earlier one and records without an identifier are not indexed
    pub fn build(drivers: &'a [DriverRecord], constructors: &'a [ConstructorRecord]) -> Self {
        let drivers = drivers
            .iter()
            .filter_map(|d| d.id().map(|id| (id, d)))
            .collect();
        let constructors = constructors
            .iter()
            .filter_map(|c| c.id().map(|id| (id, c)))
            .collect();
        Self {
            drivers,
            constructors,
        }
    }

    /// Driver with this identifier, if any
    pub fn driver(&self, id: Option<&str>) -> Option<&'a DriverRecord> {
        id.and_then(|id| self.drivers.get(id).copied())
    }

    /// Constructor with this identifier, if any
    pub fn constructor(&self, id: Option<&str>) -> Option<&'a ConstructorRecord> {
        id.and_then(|id| self.constructors.get(id).copied())
    }
}

/// Join one season's drivers, constructors and races into rows
///
/// One row per (race, result) pair, in race order and then result order.
/// Races without results produce no rows. An identifier missing from a
/// lookup leaves that row's driver or team fields empty.
pub fn aggregate(
    drivers: &[DriverRecord],
    constructors: &[ConstructorRecord],
    races: &[RaceRecord],
) -> Vec<FlatRow> {
    let lookups = Lookups::build(drivers, constructors);
    let mut rows = Vec::with_capacity(races.iter().map(|r| r.results.len()).sum());

    debug!("Number of races: {}", races.len());
    for race in races {
        let race_name = race.race_name.as_deref().unwrap_or_default();
        if race.results.is_empty() {
            debug!("No results available for {race_name}");
            continue;
        }
        debug!("Number of results for {race_name}: {}", race.results.len());

        for result in &race.results {
            let driver = lookups.driver(result.driver_id());
            let team = lookups.constructor(result.constructor_id());

            let driver_name = format!(
                "{} {}",
                driver.and_then(|d| d.given_name.as_deref()).unwrap_or_default(),
                driver.and_then(|d| d.family_name.as_deref()).unwrap_or_default()
            );

            rows.push(
                FlatRow::new()
                    .with("race_name", race_name)
                    .with("circuit", race.circuit_name().unwrap_or_default())
                    .with("country", race.country().unwrap_or_default())
                    .with("date", race.date.as_deref().unwrap_or_default())
                    .with("season", race.season.as_deref().unwrap_or_default())
                    .with("driver", driver_name)
                    .with(
                        "team",
                        team.and_then(|t| t.name.as_deref()).unwrap_or_default(),
                    )
                    .with(
                        "nationality",
                        driver
                            .and_then(|d| d.nationality.as_deref())
                            .unwrap_or_default(),
                    )
                    .with("position", result.position.as_deref().unwrap_or_default())
                    .with("points", result.points.as_deref().unwrap_or_default()),
            );
        }
    }

    rows
}

/// Flatten races from the results endpoint using the driver and
/// constructor objects embedded in each result
pub fn flatten_results(races: &[RaceRecord]) -> Vec<FlatRow> {
    let mut rows = Vec::new();

    for race in races {
        let date = normalize_date(race.date.as_deref().unwrap_or_default());

        for result in &race.results {
            let driver = result.driver.clone().unwrap_or_default();
            let constructor = result.constructor.as_ref();

            rows.push(
                FlatRow::new()
                    .with("Race Name", race.race_name.as_deref().unwrap_or_default())
                    .with("Round", race.round.as_deref().unwrap_or_default())
                    .with("Date", date.as_str())
                    .with("Circuit", race.circuit_name().unwrap_or_default())
                    .with("Driver Name", driver.full_name())
                    .with(
                        "Driver Nationality",
                        driver.nationality.as_deref().unwrap_or_default(),
                    )
                    .with(
                        "Constructor",
                        constructor
                            .and_then(|c| c.name.as_deref())
                            .unwrap_or_default(),
                    )
                    .with("Position", result.position.as_deref().unwrap_or_default())
                    .with("Points", result.points.as_deref().unwrap_or_default()),
            );
        }
    }

    rows
}

/// Re-render a `YYYY-MM-DD` date in canonical form; anything unparseable
/// is passed through unchanged
pub fn normalize_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(e) => {
            warn!("Keeping unparseable race date '{raw}': {e}");
            raw.to_string()
        }
    }
}
