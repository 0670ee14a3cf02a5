//! HTTP client module
//!
//! Provides the HTTP transport used to talk to the statistics API.
//!
//! # Features
//!
//! - **Strict Status Check**: only `200 OK` counts as success
//! - **Timeouts**: every request is bounded
//! - **Rate Limiting**: Token bucket rate limiter using governor

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};

#[cfg(test)]
mod tests;
