//! Tests for the API client

use super::*;
use crate::error::Error;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, page_size: u32, max_pages: u32) -> ErgastClient {
    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .no_rate_limit()
        .build();
    ErgastClient::with_http(HttpClient::with_config(config).unwrap(), page_size, max_pages)
}

fn results_page(total: u64, races: Vec<Value>) -> Value {
    json!({
        "MRData": {
            "limit": "2",
            "total": total.to_string(),
            "RaceTable": {"season": "2021", "Races": races}
        }
    })
}

fn race(round: u32) -> Value {
    json!({
        "season": "2021",
        "round": round.to_string(),
        "raceName": format!("Race {round}"),
        "date": "2021-03-28",
        "Results": [{"position": "1", "points": "25", "Driver": {"driverId": "hamilton"}}]
    })
}

#[test]
fn test_endpoint_paths() {
    assert_eq!(Endpoint::Drivers.path(), "/drivers.json");
    assert_eq!(Endpoint::SeasonDrivers(2021).path(), "/2021/drivers.json");
    assert_eq!(
        Endpoint::SeasonConstructors(2021).path(),
        "/2021/constructors.json"
    );
    assert_eq!(Endpoint::Season(2021).path(), "/2021.json");
    assert_eq!(Endpoint::SeasonResults(1950).path(), "/1950/results.json");
}

#[tokio::test]
async fn test_fetch_returns_parsed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/drivers.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"MRData": {}})))
        .mount(&server)
        .await;

    let client = client_for(&server, 100, 50);
    let body = client
        .fetch("/drivers.json", RequestConfig::new())
        .await
        .unwrap();
    assert_eq!(body, json!({"MRData": {}}));
}

#[tokio::test]
async fn test_drivers_raw_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/drivers.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "MRData": {"DriverTable": {"Drivers": [
                {"driverId": "abate", "givenName": "Carlo", "familyName": "Abate"},
                {"driverId": "abecassis", "givenName": "George", "familyName": "Abecassis"}
            ]}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 100, 50);
    let drivers = client.drivers().await.unwrap();

    assert_eq!(drivers.len(), 2);
    assert_eq!(drivers[0]["driverId"], "abate");
}

#[tokio::test]
async fn test_season_drivers_and_constructors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2021/drivers.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "MRData": {"DriverTable": {"season": "2021", "Drivers": [
                {"driverId": "hamilton", "givenName": "Lewis", "familyName": "Hamilton", "nationality": "British"}
            ]}}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/2021/constructors.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "MRData": {"ConstructorTable": {"season": "2021", "Constructors": [
                {"constructorId": "mercedes", "name": "Mercedes", "nationality": "German"}
            ]}}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, 100, 50);
    let drivers = client.season_drivers(2021).await.unwrap();
    let constructors = client.season_constructors(2021).await.unwrap();

    assert_eq!(drivers.len(), 1);
    assert_eq!(drivers[0].full_name(), "Lewis Hamilton");
    assert_eq!(constructors[0].name.as_deref(), Some("Mercedes"));
}

#[tokio::test]
async fn test_season_races() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2021.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_page(2, vec![race(1), race(2)])))
        .mount(&server)
        .await;

    let client = client_for(&server, 100, 50);
    let races = client.season_races(2021).await.unwrap();

    assert_eq!(races.len(), 2);
    assert_eq!(races[1].race_name.as_deref(), Some("Race 2"));
}

#[tokio::test]
async fn test_season_results_walks_every_page() {
    let server = MockServer::start().await;
    for (offset, round) in [("0", 1), ("2", 2), ("4", 3)] {
        Mock::given(method("GET"))
            .and(path("/2021/results.json"))
            .and(query_param("limit", "2"))
            .and(query_param("offset", offset))
            .respond_with(ResponseTemplate::new(200).set_body_json(results_page(5, vec![race(round)])))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server, 2, 50);
    let races = client.season_results(2021).await.unwrap();

    let rounds: Vec<_> = races.iter().filter_map(|r| r.round.clone()).collect();
    assert_eq!(rounds, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_season_results_stops_on_empty_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2021/results.json"))
        .and(query_param("offset", "0"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"MRData": {"RaceTable": {"Races": [race(1)]}}})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/2021/results.json"))
        .and(query_param("offset", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"MRData": {"RaceTable": {"Races": []}}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 2, 50);
    let races = client.season_results(2021).await.unwrap();
    assert_eq!(races.len(), 1);
}

#[tokio::test]
async fn test_season_results_page_ceiling() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2021/results.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_page(1000, vec![race(1)])))
        .expect(3)
        .mount(&server)
        .await;

    let client = client_for(&server, 2, 3);
    let err = client.season_results(2021).await.unwrap_err();

    assert!(matches!(err, Error::PaginationLimit { max_pages: 3 }));
}

#[tokio::test]
async fn test_failed_status_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2021/drivers.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 100, 50);
    let err = client.season_drivers(2021).await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_missing_table_is_extraction_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2021/constructors.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"MRData": {}})))
        .mount(&server)
        .await;

    let client = client_for(&server, 100, 50);
    let err = client.season_constructors(2021).await.unwrap_err();
    assert!(matches!(err, Error::RecordExtraction { .. }));
}

#[test]
fn test_new_rejects_invalid_config() {
    let config = crate::config::AppConfig {
        base_url: "not a url".to_string(),
        ..Default::default()
    };
    assert!(ErgastClient::new(&config).is_err());
}
