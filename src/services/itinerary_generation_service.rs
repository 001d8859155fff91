use std::sync::Arc;

use crate::error::ItineraryError;
use crate::models::{itinerary::ItineraryResponse, trip::TripRequest};
use crate::services::gemini_service::TextGenerator;
use crate::services::itinerary_parser::parse_itinerary;
use crate::services::prompt_service::build_itinerary_prompt;

/// Validate, prompt, invoke, parse: one pass per request, no retries.
pub struct ItineraryGenerator {
    text_generator: Arc<dyn TextGenerator>,
}

impl ItineraryGenerator {
    pub fn new(text_generator: Arc<dyn TextGenerator>) -> Self {
        Self { text_generator }
    }

    pub async fn generate_itinerary(
        &self,
        trip: &TripRequest,
    ) -> Result<ItineraryResponse, ItineraryError> {
        if !self.text_generator.is_configured() {
            log::error!("Rejecting itinerary request: Gemini API key not configured");
            return Err(ItineraryError::NotConfigured);
        }

        let day_count = trip.day_count()?;
        log::info!(
            "Generating {}-day itinerary for {}",
            day_count.get(),
            trip.destination
        );

        let prompt = build_itinerary_prompt(&trip.destination, day_count);

        let raw = self
            .text_generator
            .generate(&prompt)
            .await
            .inspect_err(|e| log::error!("Text generation failed: {}", e))?;
        log::debug!("Raw model response: {}", raw);

        let itinerary = parse_itinerary(&raw).inspect_err(|e| match e {
            ItineraryError::MalformedResponse => {
                log::warn!("Model response was not valid JSON ({} bytes)", raw.len())
            }
            other => log::warn!("Model response did not match itinerary shape: {}", other),
        })?;

        if !itinerary.has_sequential_days(day_count.get()) {
            log::warn!(
                "Model returned {} days for a {}-day trip or numbered them out of order",
                itinerary.days.len(),
                day_count.get()
            );
        }

        Ok(itinerary)
    }
}
