use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;

use crate::config::AppConfig;

#[derive(Serialize)]
struct RootMessage {
    message: &'static str,
}

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

/*
    /
*/
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(RootMessage {
        message: "Wanderlust API is running",
    })
}

/*
    /health
*/
pub async fn health_check(config: web::Data<AppConfig>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    // Only checks that a key is present, no call is made to Gemini
    let gemini_result = check_gemini(&config);
    health
        .services
        .insert("gemini".to_string(), gemini_result.clone());

    if gemini_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_gemini(config: &AppConfig) -> ServiceStatus {
    match config.gemini.masked_key() {
        Some(masked_key) => ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!(
                "Gemini API key configured ({}), model: {}",
                masked_key, config.gemini.model
            )),
        },
        None => ServiceStatus {
            status: "error".to_string(),
            details: Some("GEMINI_API_KEY not configured".to_string()),
        },
    }
}
