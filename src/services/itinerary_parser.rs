use serde_json::error::Category;

use crate::error::ItineraryError;
use crate::models::itinerary::ItineraryResponse;

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Drop the markdown fence markers models like to wrap JSON in.
///
/// Only the two literal markers are removed, this is not a markdown parser.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace(JSON_FENCE, "").replace(FENCE, "").trim().to_string()
}

/// Decode normalized model text into an itinerary.
///
/// Text that is not JSON at all maps to `MalformedResponse`, whose message
/// never includes the raw text. Valid JSON of the wrong shape maps to
/// `Generation` carrying serde's description of the mismatch.
pub fn decode(text: &str) -> Result<ItineraryResponse, ItineraryError> {
    serde_json::from_str(text).map_err(|e| match e.classify() {
        Category::Syntax | Category::Eof => ItineraryError::MalformedResponse,
        Category::Data | Category::Io => ItineraryError::Generation(e.to_string()),
    })
}

pub fn parse_itinerary(raw: &str) -> Result<ItineraryResponse, ItineraryError> {
    decode(&strip_code_fences(raw))
}
