use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use wanderlust_api::{
    config::AppConfig,
    routes,
    services::{gemini_service::GeminiClient, itinerary_generation_service::ItineraryGenerator},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    log::info!("Application starting...");

    let config = AppConfig::from_env();
    log::debug!("Loaded configuration: {:?}", config);

    if !config.gemini.is_configured() {
        log::warn!("GEMINI_API_KEY is not set, itinerary requests will fail until it is configured");
    }

    let gemini = GeminiClient::new(&config.gemini).map_err(std::io::Error::other)?;
    log::info!("Gemini client ready, model: {}", gemini.model());

    let generator = web::Data::new(ItineraryGenerator::new(Arc::new(gemini)));
    let app_config = web::Data::new(config.clone());

    log::info!("Starting HTTP server on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(routes::cors_policy(&app_config))
            .wrap(Logger::default())
            .app_data(generator.clone())
            .app_data(app_config.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
