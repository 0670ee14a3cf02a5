//! Ergast API client

use super::endpoints::Endpoint;
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::{OffsetPaginator, PaginationState, Paginator, StopCondition};
use crate::records::{
    extract_list, extract_records, ConstructorRecord, DriverRecord, RaceRecord, TablePath,
};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Client for the statistics endpoints the datasets are built from
#[derive(Debug)]
pub struct ErgastClient {
    http: HttpClient,
    page_size: u32,
    max_pages: u32,
}

impl ErgastClient {
    /// Create a client from application configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::with_config(config.http_config())?;
        Ok(Self::with_http(http, config.page_size, config.max_pages))
    }

    /// Create a client around an existing HTTP client
    pub fn with_http(http: HttpClient, page_size: u32, max_pages: u32) -> Self {
        Self {
            http,
            page_size: page_size.max(1),
            max_pages: max_pages.max(1),
        }
    }

    /// GET `path` relative to the base URL and parse the JSON body
    pub async fn fetch(&self, path: &str, request: RequestConfig) -> Result<Value> {
        self.http.get_json_with_config(path, request).await
    }

    /// Fetch one endpoint and extract the list at `table`
    async fn fetch_list(&self, endpoint: Endpoint, table: TablePath) -> Result<Vec<Value>> {
        let body = self.fetch(&endpoint.path(), RequestConfig::new()).await?;
        extract_list(&body, table)
    }

    /// Fetch every page of a paged endpoint and concatenate the lists
    ///
    /// Requests `limit`/`offset` pages until one comes back empty or the
    /// offset passes `MRData.total`. More than `max_pages` requests is an
    /// error rather than an endless loop.
    pub async fn fetch_paged(&self, endpoint: Endpoint, table: TablePath) -> Result<Vec<Value>> {
        let path = endpoint.path();
        let paginator = OffsetPaginator::new(
            "offset",
            "limit",
            self.page_size,
            StopCondition::total_count("MRData.total"),
        );
        let mut state = PaginationState::new();
        let mut records = Vec::new();

        loop {
            if state.page >= self.max_pages {
                warn!(
                    "Stopping {} after {} pages without reaching the end",
                    path, self.max_pages
                );
                return Err(Error::PaginationLimit {
                    max_pages: self.max_pages,
                });
            }

            let request = paginator
                .initial_params(&state)
                .into_iter()
                .fold(RequestConfig::new(), |req, (k, v)| req.query(k, v));

            let body = self.fetch(&path, request).await?;
            let page = extract_list(&body, table)?;
            let count = page.len();
            debug!(
                "Fetched page {} of {} (offset {}, {} records)",
                state.page + 1,
                path,
                state.offset,
                count
            );
            records.extend(page);

            if paginator.process_response(&body, count, &mut state).is_done() {
                break;
            }
        }

        info!(
            "Fetched {} records from {} in {} pages",
            records.len(),
            path,
            state.page
        );
        Ok(records)
    }

    /// Every driver, as raw records (for schema inference)
    pub async fn drivers(&self) -> Result<Vec<Value>> {
        self.fetch_list(Endpoint::Drivers, TablePath::DRIVERS).await
    }

    /// Drivers who took part in a season
    pub async fn season_drivers(&self, season: i32) -> Result<Vec<DriverRecord>> {
        let body = self
            .fetch(&Endpoint::SeasonDrivers(season).path(), RequestConfig::new())
            .await?;
        extract_records(&body, TablePath::DRIVERS)
    }

    /// Constructors that took part in a season
    pub async fn season_constructors(&self, season: i32) -> Result<Vec<ConstructorRecord>> {
        let body = self
            .fetch(
                &Endpoint::SeasonConstructors(season).path(),
                RequestConfig::new(),
            )
            .await?;
        extract_records(&body, TablePath::CONSTRUCTORS)
    }

    /// A season's race calendar (`/{season}.json`)
    pub async fn season_races(&self, season: i32) -> Result<Vec<RaceRecord>> {
        let body = self
            .fetch(&Endpoint::Season(season).path(), RequestConfig::new())
            .await?;
        extract_records(&body, TablePath::RACES)
    }

    /// All results of a season, fetched page by page
    pub async fn season_results(&self, season: i32) -> Result<Vec<RaceRecord>> {
        let raw = self
            .fetch_paged(Endpoint::SeasonResults(season), TablePath::RACES)
            .await?;
        crate::records::decode_records(raw)
    }
}
