use crate::models::trip::DayCount;

const RESPONSE_FORMAT: &str = r#"{
  "hotel": {
    "name": "Hotel name here",
    "location": "Specific location/neighborhood",
    "description": "2-3 sentence description of why this hotel is recommended"
  },
  "days": [
    {
      "dayNumber": 1,
      "breakfast": {
        "name": "Restaurant name",
        "description": "Brief description of the food spot and what to try"
      },
      "lunch": {
        "name": "Restaurant name",
        "description": "Brief description of the food spot and what to try"
      },
      "dinner": {
        "name": "Restaurant name",
        "description": "Brief description of the food spot and what to try"
      },
      "activity": {
        "name": "Activity or attraction name",
        "description": "What to do and why it's worth visiting"
      }
    }
  ]
}"#;

/// Render the instruction sent to the model for a trip of `day_count` days.
pub fn build_itinerary_prompt(destination: &str, day_count: DayCount) -> String {
    let days = day_count.get();

    format!(
        "You are a travel planner. Create a detailed travel itinerary for a trip to {destination} for {days} days.\n\
         \n\
         Please respond with ONLY valid JSON in exactly this format, no markdown or extra text:\n\
         {RESPONSE_FORMAT}\n\
         \n\
         The \"days\" array must contain exactly {days} entries, with \"dayNumber\" running from 1 to {days} in order. \
         Create entries for all {days} days. Make sure each day has unique, varied recommendations. \
         Include local favorites, popular spots, and hidden gems. \
         The hotel should be well-located and suitable for tourists."
    )
}
