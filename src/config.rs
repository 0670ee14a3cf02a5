//! Application configuration
//!
//! Settings are read from an optional YAML file; every field has a default
//! so an empty file (or no file at all) is a valid configuration.

use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the Ergast-compatible API (without trailing slash)
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Records requested per page for paged endpoints
    pub page_size: u32,

    /// Hard ceiling on pages fetched by one paged request
    pub max_pages: u32,

    /// Directory CSV files are written to
    pub output_dir: PathBuf,

    /// User agent sent with every request
    pub user_agent: String,

    /// Client-side rate limit (None disables it)
    pub rate_limit: Option<RateLimitConfig>,

    /// Port for the interactive page
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "https://ergast.com/api/f1".to_string(),
            timeout_secs: 30,
            page_size: 100,
            max_pages: 50,
            output_dir: PathBuf::from("."),
            user_agent: format!("f1-dataset/{}", env!("CARGO_PKG_VERSION")),
            rate_limit: Some(RateLimitConfig::default()),
            port: 8080,
        }
    }
}

/// Rate limit settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Maximum requests per second
    pub requests_per_second: u32,
    /// Burst size
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        // Public Ergast mirrors allow 4 requests per second
        Self {
            requests_per_second: 4,
            burst_size: 4,
        }
    }
}

impl AppConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config '{}': {e}", path.display()))
        })?;
        Self::from_yaml(&yaml)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url)?;
        if self.page_size == 0 {
            return Err(Error::config("page_size must be greater than zero"));
        }
        if self.max_pages == 0 {
            return Err(Error::config("max_pages must be greater than zero"));
        }
        Ok(())
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build the HTTP client configuration
    pub fn http_config(&self) -> HttpClientConfig {
        let builder = HttpClientConfig::builder()
            .base_url(&self.base_url)
            .timeout(self.timeout())
            .user_agent(&self.user_agent);

        match &self.rate_limit {
            Some(rl) => builder
                .rate_limit(RateLimiterConfig::new(rl.requests_per_second, rl.burst_size))
                .build(),
            None => builder.no_rate_limit().build(),
        }
    }
}
