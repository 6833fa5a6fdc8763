//! Response types for the rental pricing API.
//!
//! This module defines the success and error response structures and the
//! mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{EligibilityRejection, PricingOutcome, Quote};

/// Body of a successful `/price` response.
///
/// Eligibility rejections are successful responses too: `eligible` is false,
/// `rejection` is set and `result` holds the rejection message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceResponse {
    /// Identifier of this calculation.
    pub calculation_id: Uuid,
    /// The rejection message or the `$<amount>` quote string.
    pub result: String,
    /// Whether a price was computed.
    pub eligible: bool,
    /// The quote with its audit trace, when eligible.
    pub quote: Option<Quote>,
    /// The rejection, when not eligible.
    pub rejection: Option<RejectionBody>,
}

/// A rejection as returned to API clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectionBody {
    /// Machine-readable rejection code.
    pub code: String,
    /// The rejection message.
    pub message: String,
}

impl From<&EligibilityRejection> for RejectionBody {
    fn from(rejection: &EligibilityRejection) -> Self {
        Self {
            code: rejection.code().to_string(),
            message: rejection.to_string(),
        }
    }
}

impl PriceResponse {
    /// Builds a response from a pricing outcome.
    pub fn new(calculation_id: Uuid, outcome: PricingOutcome) -> Self {
        let result = outcome.to_string();
        match outcome {
            PricingOutcome::Quoted(quote) => Self {
                calculation_id,
                result,
                eligible: true,
                quote: Some(quote),
                rejection: None,
            },
            PricingOutcome::Rejected(rejection) => Self {
                calculation_id,
                result,
                eligible: false,
                quote: None,
                rejection: Some(RejectionBody::from(&rejection)),
            },
        }
    }
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
        match &error {
            // Only reachable with a rule table that skipped validation
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidRules { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    error.to_string(),
                ),
            },
            EngineError::InvalidTimestamp { field, value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TIMESTAMP",
                    format!("Invalid timestamp for '{}'", field),
                    format!("{} ms cannot be represented as a calendar date", value),
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "CALCULATION_ERROR",
                    "Calculation failed",
                    message,
                ),
            },
        }
    }
}
