//! Data sources the pipeline reads from

use crate::api::ErgastClient;
use crate::error::Result;
use crate::records::{ConstructorRecord, DriverRecord, RaceRecord};
use async_trait::async_trait;
use serde_json::Value;

/// Everything the dataset pipeline needs from the statistics API
///
/// [`ErgastClient`] is the production implementation; tests substitute
/// canned batches.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Every driver as raw JSON objects
    async fn drivers(&self) -> Result<Vec<Value>>;

    /// Drivers of one season
    async fn season_drivers(&self, season: i32) -> Result<Vec<DriverRecord>>;

    /// Constructors of one season
    async fn season_constructors(&self, season: i32) -> Result<Vec<ConstructorRecord>>;

    /// Race calendar of one season
    async fn season_races(&self, season: i32) -> Result<Vec<RaceRecord>>;

    /// Races of one season with their results, all pages
    async fn season_results(&self, season: i32) -> Result<Vec<RaceRecord>>;
}

#[async_trait]
impl DatasetSource for ErgastClient {
    async fn drivers(&self) -> Result<Vec<Value>> {
        ErgastClient::drivers(self).await
    }

    async fn season_drivers(&self, season: i32) -> Result<Vec<DriverRecord>> {
        ErgastClient::season_drivers(self, season).await
    }

    async fn season_constructors(&self, season: i32) -> Result<Vec<ConstructorRecord>> {
        ErgastClient::season_constructors(self, season).await
    }

    async fn season_races(&self, season: i32) -> Result<Vec<RaceRecord>> {
        ErgastClient::season_races(self, season).await
    }

    async fn season_results(&self, season: i32) -> Result<Vec<RaceRecord>> {
        ErgastClient::season_results(self, season).await
    }
}
