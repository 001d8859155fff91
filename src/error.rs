use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every way a generate-itinerary request can fail.
///
/// The `Display` text of each variant is exactly the `detail` message the
/// client receives.
#[derive(Debug, Error)]
pub enum ItineraryError {
    #[error("Gemini API key not configured")]
    NotConfigured,

    #[error("End date must be after start date")]
    InvalidDateRange,

    #[error("Trip cannot exceed 30 days")]
    TripTooLong,

    /// The call to the text-generation service itself failed.
    #[error("Error generating itinerary: {0}")]
    Upstream(String),

    /// The model text was not a syntactically valid JSON document.
    #[error("Failed to parse itinerary from AI response")]
    MalformedResponse,

    /// Anything else that went wrong while producing the itinerary.
    #[error("Error generating itinerary: {0}")]
    Generation(String),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl ResponseError for ItineraryError {
    fn status_code(&self) -> StatusCode {
        match self {
            ItineraryError::InvalidDateRange | ItineraryError::TripTooLong => {
                StatusCode::BAD_REQUEST
            }
            ItineraryError::NotConfigured
            | ItineraryError::Upstream(_)
            | ItineraryError::MalformedResponse
            | ItineraryError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorDetail::new(self.to_string()))
    }
}
