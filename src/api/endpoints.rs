//! Endpoint paths, relative to the configured base URL

/// One API endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `/drivers.json`
    Drivers,
    /// `/{season}/drivers.json`
    SeasonDrivers(i32),
    /// `/{season}/constructors.json`
    SeasonConstructors(i32),
    /// `/{season}.json`
    Season(i32),
    /// `/{season}/results.json`
    SeasonResults(i32),
}

impl Endpoint {
    /// Path relative to the API base URL
    pub fn path(self) -> String {
        match self {
            Endpoint::Drivers => "/drivers.json".to_string(),
            Endpoint::SeasonDrivers(season) => format!("/{season}/drivers.json"),
            Endpoint::SeasonConstructors(season) => format!("/{season}/constructors.json"),
            Endpoint::Season(season) => format!("/{season}.json"),
            Endpoint::SeasonResults(season) => format!("/{season}/results.json"),
        }
    }
}
