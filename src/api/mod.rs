//! HTTP API module for the Labor Cost Engine.
//!
//! This module exposes the employer cost calculation and the active rate
//! table over HTTP.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse, CalculationResponse, FormattedSummary};
pub use state::AppState;
