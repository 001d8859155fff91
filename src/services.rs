pub mod gemini_service;
pub mod itinerary_generation_service;
pub mod itinerary_parser;
pub mod prompt_service;
