//! Application state for the Labor Cost Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::RateTable;

/// Shared application state.
///
/// Holds the rate table every request is calculated against. The table is
/// read-only, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// The active rate table.
    rates: Arc<RateTable>,
}

impl AppState {
    /// Creates a new application state with the given rate table.
    pub fn new(rates: RateTable) -> Self {
        Self {
            rates: Arc::new(rates),
        }
    }

    /// Returns a reference to the rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_the_rate_table() {
        let state = AppState::new(RateTable::colombia_2026());
        let clone = state.clone();
        assert!(std::ptr::eq(state.rates(), clone.rates()));
    }
}
