//! Response types for the Labor Cost Engine API.
//!
//! This module defines the success payload of `/calculate`, the error
//! response structures and the mapping from engine errors to HTTP errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::format::{format_currency, format_percentage};
use crate::models::{AuditTrace, CostBreakdown, CostGroup, Period};

/// Presentation-ready strings for the headline figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedSummary {
    /// Total employer cost for the requested period.
    pub total_employer_cost: String,
    /// Overhead over the base salary.
    pub overhead_percentage: String,
    /// Total employer cost over twelve months.
    pub annual_total_employer_cost: String,
}

impl FormattedSummary {
    /// Formats the summary from a monthly breakdown and its period view.
    pub fn new(monthly: &CostBreakdown, shown: &CostBreakdown) -> Self {
        Self {
            total_employer_cost: format_currency(shown.total_employer_cost),
            overhead_percentage: format_percentage(shown.overhead_percentage),
            annual_total_employer_cost: format_currency(
                monthly.for_period(Period::Annual).total_employer_cost,
            ),
        }
    }
}

/// Response body of a successful `/calculate` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The period the amounts are reported for.
    pub period: Period,
    /// True when the requested salary was replaced by the minimum wage.
    pub salary_defaulted: bool,
    /// The cost breakdown scaled to `period`.
    pub breakdown: CostBreakdown,
    /// Itemized display groups scaled to `period`.
    pub groups: Vec<CostGroup>,
    /// Headline figures formatted for display.
    pub formatted: FormattedSummary,
    /// Audit trace of the monthly calculation.
    pub audit_trace: AuditTrace,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidRiskLevel { level } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RISK_LEVEL",
                    format!("Invalid risk level: {}", level),
                    "Risk level must be one of the configured levels 1-5",
                ),
            },
            EngineError::InvalidSalary { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SALARY",
                    format!("Invalid base salary: {}", value),
                    "Base salary must be at least 1 and within the supported range",
                ),
            },
            EngineError::InvalidRateTable { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Rate table error",
                    format!("{}: {}", field, message),
                ),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_risk_level_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidRiskLevel { level: 9 }.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_RISK_LEVEL");
        assert!(api_error.error.message.contains('9'));
    }

    #[test]
    fn test_invalid_salary_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidSalary {
            value: "-5".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_SALARY");
    }

    #[test]
    fn test_config_errors_map_to_internal_error() {
        let api_error: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "/x.yaml".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }
}
