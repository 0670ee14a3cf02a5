//! Record types decoded from API responses
//!
//! Every field is optional. The API is not trusted to send every key, and
//! consumers choose their own fallback (almost always the empty string).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Accept strings, numbers and booleans for fields the API sends as strings
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

// ============================================================================
// Drivers
// ============================================================================

/// A driver from `MRData.DriverTable.Drivers`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DriverRecord {
    /// Stable identifier such as `hamilton`
    #[serde(deserialize_with = "lenient_string")]
    pub driver_id: Option<String>,
    /// Race number, absent for older drivers
    #[serde(deserialize_with = "lenient_string")]
    pub permanent_number: Option<String>,
    /// Three-letter abbreviation
    #[serde(deserialize_with = "lenient_string")]
    pub code: Option<String>,
    /// Wikipedia link
    #[serde(deserialize_with = "lenient_string")]
    pub url: Option<String>,
    /// First name
    #[serde(deserialize_with = "lenient_string")]
    pub given_name: Option<String>,
    /// Last name
    #[serde(deserialize_with = "lenient_string")]
    pub family_name: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(deserialize_with = "lenient_string")]
    pub date_of_birth: Option<String>,
    /// Nationality as an adjective
    #[serde(deserialize_with = "lenient_string")]
    pub nationality: Option<String>,
}

impl DriverRecord {
    /// Identifier used by the lookup join
    pub fn id(&self) -> Option<&str> {
        self.driver_id.as_deref()
    }

    /// "Given Family", with each missing part as an empty string
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.given_name.as_deref().unwrap_or_default(),
            self.family_name.as_deref().unwrap_or_default()
        )
    }
}

// ============================================================================
// Constructors
// ============================================================================

/// A constructor (team) from `MRData.ConstructorTable.Constructors`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConstructorRecord {
    /// Stable identifier such as `mercedes`
    #[serde(deserialize_with = "lenient_string")]
    pub constructor_id: Option<String>,
    /// Wikipedia link
    #[serde(deserialize_with = "lenient_string")]
    pub url: Option<String>,
    /// Display name
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    /// Nationality as an adjective
    #[serde(deserialize_with = "lenient_string")]
    pub nationality: Option<String>,
}

impl ConstructorRecord {
    /// Identifier used by the lookup join
    pub fn id(&self) -> Option<&str> {
        self.constructor_id.as_deref()
    }
}

// ============================================================================
// Races
// ============================================================================

/// Where a circuit is
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    /// Town or city
    #[serde(deserialize_with = "lenient_string")]
    pub locality: Option<String>,
    /// Country
    #[serde(deserialize_with = "lenient_string")]
    pub country: Option<String>,
}

/// A race venue
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Circuit {
    /// Stable identifier
    #[serde(deserialize_with = "lenient_string")]
    pub circuit_id: Option<String>,
    /// Display name
    #[serde(deserialize_with = "lenient_string")]
    pub circuit_name: Option<String>,
    /// Where the circuit is
    #[serde(rename = "Location")]
    pub location: Option<Location>,
}

/// One classified result inside a race
///
/// The results endpoint embeds full driver and constructor objects; the
/// season endpoint omits results altogether.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResultRecord {
    /// Finishing position
    #[serde(deserialize_with = "lenient_string")]
    pub position: Option<String>,
    /// Points scored
    #[serde(deserialize_with = "lenient_string")]
    pub points: Option<String>,
    /// Classified driver
    #[serde(rename = "Driver")]
    pub driver: Option<DriverRecord>,
    /// Team the driver raced for
    #[serde(rename = "Constructor")]
    pub constructor: Option<ConstructorRecord>,
}

impl ResultRecord {
    /// Referenced driver identifier
    pub fn driver_id(&self) -> Option<&str> {
        self.driver.as_ref().and_then(DriverRecord::id)
    }

    /// Referenced constructor identifier
    pub fn constructor_id(&self) -> Option<&str> {
        self.constructor.as_ref().and_then(ConstructorRecord::id)
    }
}

/// A race from `MRData.RaceTable.Races`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RaceRecord {
    /// Season year
    #[serde(deserialize_with = "lenient_string")]
    pub season: Option<String>,
    /// Round within the season
    #[serde(deserialize_with = "lenient_string")]
    pub round: Option<String>,
    /// Name such as `Bahrain Grand Prix`
    #[serde(deserialize_with = "lenient_string")]
    pub race_name: Option<String>,
    /// Venue
    #[serde(rename = "Circuit")]
    pub circuit: Option<Circuit>,
    /// Race day as sent by the API
    #[serde(deserialize_with = "lenient_string")]
    pub date: Option<String>,
    /// Classified results; empty on the season endpoint
    #[serde(rename = "Results")]
    pub results: Vec<ResultRecord>,
}

impl RaceRecord {
    /// Circuit name, if present
    pub fn circuit_name(&self) -> Option<&str> {
        self.circuit.as_ref()?.circuit_name.as_deref()
    }

    /// Country of the circuit, if present
    pub fn country(&self) -> Option<&str> {
        self.circuit.as_ref()?.location.as_ref()?.country.as_deref()
    }
}
