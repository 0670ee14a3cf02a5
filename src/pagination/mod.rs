//! Pagination module
//!
//! Supports: Offset
//!
//! # Overview
//!
//! A paginator turns the previous response into the next page's query
//! parameters and decides when the loop is over. The loop driving it also
//! enforces a page ceiling so a server that never returns an empty page
//! cannot keep it running forever.

mod strategies;
mod types;

pub use strategies::OffsetPaginator;
pub use types::{
    check_stop_condition, extract_count, NextPage, PaginationState, Paginator, StopCondition,
    StopResult,
};
