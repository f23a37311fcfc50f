//! HTTP request handlers for the Labor Cost Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_cost, resolve_base_salary};
use crate::error::EngineError;
use crate::models::CostRequest;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, FormattedSummary};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/rates", get(rates_handler))
        .with_state(state)
}

/// Handler for GET /rates.
///
/// Returns the active rate table, including the derived thresholds.
async fn rates_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.rates().clone())
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the itemized employer cost.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::validation_error(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let risk_level = match u8::try_from(request.risk_level) {
        Ok(level) => level,
        Err(_) => {
            return engine_error_response(
                correlation_id,
                EngineError::InvalidRiskLevel {
                    level: request.risk_level,
                },
            );
        }
    };

    let rates = state.rates();
    let resolved = resolve_base_salary(request.base_salary, rates);
    if resolved.defaulted {
        info!(
            correlation_id = %correlation_id,
            minimum_wage = %resolved.salary,
            "Base salary missing or below 1, using minimum wage"
        );
    }

    let cost_request = CostRequest {
        base_salary: resolved.salary,
        risk_level,
        include_health_contribution: request.include_health_contribution,
        include_transport_allowance: request.include_transport_allowance,
    };

    match calculate_cost(&cost_request, rates) {
        Ok(calculation) => {
            let shown = calculation.breakdown.for_period(request.period);
            info!(
                correlation_id = %correlation_id,
                calculation_id = %calculation.calculation_id,
                base_salary = %cost_request.base_salary,
                risk_level = cost_request.risk_level,
                total_employer_cost = %calculation.breakdown.total_employer_cost,
                duration_us = calculation.audit_trace.duration_us,
                "Calculation completed successfully"
            );

            let response = CalculationResponse {
                calculation_id: calculation.calculation_id,
                timestamp: calculation.timestamp,
                engine_version: calculation.engine_version,
                period: request.period,
                salary_defaulted: resolved.defaulted,
                groups: shown.groups(rates),
                formatted: FormattedSummary::new(&calculation.breakdown, &shown),
                breakdown: shown,
                audit_trace: calculation.audit_trace,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}
