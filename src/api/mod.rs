//! API client module
//!
//! Talks to an Ergast-compatible motorsport statistics API.
//!
//! Every call is a single GET. A non-200 answer fails the call and nothing
//! is retried. The one paged endpoint (season results) is walked with an
//! offset paginator under a page ceiling.

mod client;
mod endpoints;

pub use client::ErgastClient;
pub use endpoints::Endpoint;

#[cfg(test)]
mod tests;
