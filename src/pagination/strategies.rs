//! Pagination strategy implementations

use super::types::{
    check_stop_condition, NextPage, PaginationState, Paginator, StopCondition, StopResult,
};
use serde_json::Value;
use std::collections::BTreeMap;

// ============================================================================
// Offset Pagination
// ============================================================================

/// Offset-based pagination
///
/// Uses offset and limit parameters to paginate, e.g.
/// `results.json?limit=100&offset=200`.
///
/// A short page does not end the loop: the Ergast results endpoint counts
/// results while the page carries races, so only an empty page (or the
/// reported total) is a reliable end marker.
#[derive(Debug, Clone)]
pub struct OffsetPaginator {
    /// Query parameter name for offset
    pub offset_param: String,
    /// Query parameter name for limit
    pub limit_param: String,
    /// Number of records per page
    pub limit_value: u32,
    /// Stop condition
    pub stop_condition: StopCondition,
}

impl OffsetPaginator {
    /// Create a new offset paginator
    pub fn new(
        offset_param: impl Into<String>,
        limit_param: impl Into<String>,
        limit_value: u32,
        stop_condition: StopCondition,
    ) -> Self {
        Self {
            offset_param: offset_param.into(),
            limit_param: limit_param.into(),
            limit_value,
            stop_condition,
        }
    }

    fn params_for(&self, offset: u32) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        params.insert(self.offset_param.clone(), offset.to_string());
        params.insert(self.limit_param.clone(), self.limit_value.to_string());
        params
    }
}

impl Paginator for OffsetPaginator {
    fn initial_params(&self, state: &PaginationState) -> BTreeMap<String, String> {
        self.params_for(state.offset)
    }

    fn process_response(
        &self,
        body: &Value,
        records_count: usize,
        state: &mut PaginationState,
    ) -> NextPage {
        state.add_fetched(records_count as u64);
        state.next_page();

        let next_offset = u64::from(state.offset) + u64::from(self.limit_value);
        if check_stop_condition(&self.stop_condition, body, records_count, next_offset)
            == StopResult::Stop
        {
            state.mark_done();
            return NextPage::Done;
        }

        state.add_offset(self.limit_value);
        NextPage::with_params(self.params_for(state.offset))
    }
}
