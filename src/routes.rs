use actix_cors::Cors;
use actix_web::{error::InternalError, web, HttpResponse};

use crate::config::AppConfig;
use crate::error::ErrorDetail;

pub mod health;
pub mod itinerary;

/// Register every route of the service on an `App` or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/", web::get().to(health::root))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route("/generate-itinerary", web::post().to(itinerary::generate)),
        );
}

/// Reject unreadable request bodies with 422 and a `detail` message.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::UnprocessableEntity().json(ErrorDetail::new(err.to_string()));
        InternalError::from_response(err, response).into()
    })
}

/// Single configured origin, any method or header, cookies allowed.
pub fn cors_policy(config: &AppConfig) -> Cors {
    Cors::default()
        .allowed_origin(&config.cors_origin)
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}
