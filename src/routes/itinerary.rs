use actix_web::{web, HttpResponse};

use crate::error::ItineraryError;
use crate::models::trip::TripRequest;
use crate::services::itinerary_generation_service::ItineraryGenerator;

/*
    /api/generate-itinerary
*/
pub async fn generate(
    generator: web::Data<ItineraryGenerator>,
    input: web::Json<TripRequest>,
) -> Result<HttpResponse, ItineraryError> {
    let trip = input.into_inner();
    let itinerary = generator.generate_itinerary(&trip).await?;

    Ok(HttpResponse::Ok().json(itinerary))
}
