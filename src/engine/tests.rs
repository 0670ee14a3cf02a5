//! Tests for the dataset pipeline

use super::*;
use crate::records::{ConstructorRecord, DriverRecord, RaceRecord};
use crate::types::max_season;
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::tempdir;

/// Canned batches standing in for the API
#[derive(Default)]
struct FakeSource {
    drivers: Vec<Value>,
    season_drivers: Vec<DriverRecord>,
    constructors: Vec<ConstructorRecord>,
    races: Vec<RaceRecord>,
    results: Vec<RaceRecord>,
    calls: AtomicUsize,
}

impl FakeSource {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl DatasetSource for FakeSource {
    async fn drivers(&self) -> Result<Vec<Value>> {
        self.hit();
        Ok(self.drivers.clone())
    }

    async fn season_drivers(&self, _season: i32) -> Result<Vec<DriverRecord>> {
        self.hit();
        Ok(self.season_drivers.clone())
    }

    async fn season_constructors(&self, _season: i32) -> Result<Vec<ConstructorRecord>> {
        self.hit();
        Ok(self.constructors.clone())
    }

    async fn season_races(&self, _season: i32) -> Result<Vec<RaceRecord>> {
        self.hit();
        Ok(self.races.clone())
    }

    async fn season_results(&self, _season: i32) -> Result<Vec<RaceRecord>> {
        self.hit();
        Ok(self.results.clone())
    }
}

/// A source whose every call fails like a non-200 answer
struct FailingSource;

#[async_trait]
impl DatasetSource for FailingSource {
    async fn drivers(&self) -> Result<Vec<Value>> {
        Err(Error::http_status(503, "unavailable"))
    }

    async fn season_drivers(&self, _season: i32) -> Result<Vec<DriverRecord>> {
        Err(Error::http_status(503, "unavailable"))
    }

    async fn season_constructors(&self, _season: i32) -> Result<Vec<ConstructorRecord>> {
        Err(Error::http_status(503, "unavailable"))
    }

    async fn season_races(&self, _season: i32) -> Result<Vec<RaceRecord>> {
        Err(Error::http_status(503, "unavailable"))
    }

    async fn season_results(&self, _season: i32) -> Result<Vec<RaceRecord>> {
        Err(Error::http_status(503, "unavailable"))
    }
}

fn from_json<T: serde::de::DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).unwrap()
}

fn season_source() -> FakeSource {
    FakeSource {
        season_drivers: from_json(json!([
            {"driverId": "hamilton", "givenName": "Lewis", "familyName": "Hamilton", "nationality": "British"},
            {"driverId": "max_verstappen", "givenName": "Max", "familyName": "Verstappen", "nationality": "Dutch"}
        ])),
        constructors: from_json(json!([
            {"constructorId": "mercedes", "name": "Mercedes"},
            {"constructorId": "red_bull", "name": "Red Bull"}
        ])),
        races: from_json(json!([
            {
                "season": "2021", "round": "1", "raceName": "Bahrain Grand Prix", "date": "2021-03-28",
                "Circuit": {"circuitName": "Bahrain International Circuit", "Location": {"country": "Bahrain"}},
                "Results": [
                    {"position": "1", "points": "25", "Driver": {"driverId": "hamilton"}, "Constructor": {"constructorId": "mercedes"}},
                    {"position": "2", "points": "18", "Driver": {"driverId": "max_verstappen"}, "Constructor": {"constructorId": "red_bull"}}
                ]
            },
            {
                "season": "2021", "round": "2", "raceName": "Emilia Romagna Grand Prix", "date": "2021-04-18",
                "Circuit": {"circuitName": "Imola", "Location": {"country": "Italy"}}
            }
        ])),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_generate_season() {
    let pipeline = DatasetPipeline::new(season_source(), ".");
    let output = pipeline.generate(Dataset::Season, 2021).await.unwrap();

    assert_eq!(output.table.columns(), SEASON_COLUMNS);
    assert_eq!(output.rows(), 2);
    assert_eq!(output.records_fetched, 2);
    assert_eq!(output.summary(), "Total Records: 2");
    assert_eq!(pipeline.source().calls(), 3);

    let first = &output.table.rows()[0];
    assert_eq!(first.get("driver"), Some("Lewis Hamilton"));
    assert_eq!(first.get("team"), Some("Mercedes"));
    assert_eq!(first.get("country"), Some("Bahrain"));
}

#[tokio::test]
async fn test_generate_drivers_uses_inferred_columns() {
    let source = FakeSource {
        drivers: vec![
            json!({"driverId": "abate", "permanentNumber": 7, "givenName": "Carlo"}),
            json!({"driverId": "alonso", "givenName": "Fernando", "code": "ALO"}),
        ],
        ..Default::default()
    };
    let pipeline = DatasetPipeline::new(source, ".");
    let output = pipeline.generate(Dataset::Drivers, 0).await.unwrap();

    assert_eq!(output.table.columns(), ["driverId", "permanentNumber", "givenName"]);
    assert_eq!(output.table.rows()[0].get("permanentNumber"), Some("7"));
    assert_eq!(output.table.rows()[1].get("permanentNumber"), Some(""));
    assert_eq!(output.table.rows()[1].get("code"), None);
}

#[tokio::test]
async fn test_drivers_schema() {
    let source = FakeSource {
        drivers: vec![json!({"driverId": "abate", "permanentNumber": 7})],
        ..Default::default()
    };
    let pipeline = DatasetPipeline::new(source, ".");
    let schema = pipeline.drivers_schema().await.unwrap();
    assert_eq!(schema.field_names().collect::<Vec<_>>(), ["driverId", "permanentNumber"]);
}

#[tokio::test]
async fn test_generate_season_results() {
    let source = FakeSource {
        results: from_json(json!([{
            "season": "2021", "round": "1", "raceName": "Bahrain Grand Prix", "date": "2021-03-28",
            "Circuit": {"circuitName": "Bahrain International Circuit"},
            "Results": [{
                "position": "1", "points": "25",
                "Driver": {"givenName": "Lewis", "familyName": "Hamilton", "nationality": "British"},
                "Constructor": {"name": "Mercedes"}
            }]
        }])),
        ..Default::default()
    };
    let pipeline = DatasetPipeline::new(source, ".");
    let output = pipeline.generate(Dataset::SeasonResults, 2021).await.unwrap();

    assert_eq!(output.table.columns(), RESULTS_COLUMNS);
    assert_eq!(output.file_name(), "f1_dataset_2021.csv");
    let row = &output.table.rows()[0];
    assert_eq!(row.get("Driver Name"), Some("Lewis Hamilton"));
    assert_eq!(row.get("Constructor"), Some("Mercedes"));
}

#[tokio::test]
async fn test_season_results_without_races_fails() {
    let pipeline = DatasetPipeline::new(FakeSource::default(), ".");
    let err = pipeline
        .generate(Dataset::SeasonResults, 2021)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::EmptyDataset));
}

#[tokio::test]
async fn test_out_of_range_season_is_rejected_before_fetch() {
    let pipeline = DatasetPipeline::new(season_source(), ".");

    for season in [1949, max_season() + 1] {
        let err = pipeline.generate(Dataset::Season, season).await.unwrap_err();
        assert!(matches!(err, Error::InvalidSeason { .. }));
    }
    assert_eq!(pipeline.source().calls(), 0);
}

#[tokio::test]
async fn test_drivers_ignores_season() {
    let source = FakeSource {
        drivers: vec![json!({"driverId": "abate"})],
        ..Default::default()
    };
    let pipeline = DatasetPipeline::new(source, ".");
    assert!(pipeline.generate(Dataset::Drivers, 1900).await.is_ok());
}

#[tokio::test]
async fn test_fetch_failure_propagates() {
    let pipeline = DatasetPipeline::new(FailingSource, ".");
    let err = pipeline.generate(Dataset::Season, 2021).await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
}

#[tokio::test]
async fn test_generate_and_save_writes_csv() {
    let dir = tempdir().unwrap();
    let pipeline = DatasetPipeline::new(season_source(), dir.path());

    let (output, path) = pipeline
        .generate_and_save(Dataset::Season, 2021)
        .await
        .unwrap();

    assert_eq!(path, dir.path().join("f1_dataset.csv"));
    let text = std::fs::read_to_string(&path).unwrap();
    let mut lines = text.split("\r\n");
    assert_eq!(
        lines.next(),
        Some("race_name,circuit,country,date,season,driver,team,nationality,position,points")
    );
    assert_eq!(text.matches("\r\n").count(), output.rows() + 1);
}

#[tokio::test]
async fn test_save_empty_season_writes_header_only() {
    let dir = tempdir().unwrap();
    let pipeline = DatasetPipeline::new(FakeSource::default(), dir.path());

    let output = pipeline.generate(Dataset::Season, 2021).await.unwrap();
    assert!(output.table.is_empty());

    let path = pipeline.save(&output).unwrap();
    let text = std::fs::read_to_string(path).unwrap();
    assert_eq!(text.lines().count(), 1);
}

#[tokio::test]
async fn test_save_empty_drivers_fails() {
    let dir = tempdir().unwrap();
    let pipeline = DatasetPipeline::new(FakeSource::default(), dir.path());

    let output = pipeline.generate(Dataset::Drivers, 0).await.unwrap();
    let err = pipeline.save(&output).unwrap_err();

    assert!(matches!(err, Error::EmptyDataset));
    assert!(!dir.path().join("f1_dataset.csv").exists());
}

#[tokio::test]
async fn test_download_blob() {
    let pipeline = DatasetPipeline::new(season_source(), ".");
    let output = pipeline.generate(Dataset::Season, 2021).await.unwrap();

    let blob = pipeline.download(&output).unwrap();
    assert_eq!(blob.file_name, "f1_dataset.csv");
    assert_eq!(
        blob.decode().unwrap(),
        crate::output::table_to_csv(&output.table).unwrap()
    );
}
