#![allow(dead_code)]

use actix_web::{middleware::Logger, web, App};
use async_trait::async_trait;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use wanderlust_api::config::{AppConfig, GeminiConfig};
use wanderlust_api::error::ItineraryError;
use wanderlust_api::routes;
use wanderlust_api::services::gemini_service::TextGenerator;
use wanderlust_api::services::itinerary_generation_service::ItineraryGenerator;

/// Deterministic stand-in for the Gemini client.
pub struct StubGenerator {
    configured: bool,
    reply: Result<String, String>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl StubGenerator {
    pub fn replying(reply: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            configured: true,
            reply: Ok(reply.into()),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        })
    }

    pub fn failing(cause: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            configured: true,
            reply: Err(cause.into()),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        })
    }

    pub fn unconfigured() -> Arc<Self> {
        Arc::new(Self {
            configured: false,
            reply: Ok(String::new()),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn generate(&self, prompt: &str) -> Result<String, ItineraryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        self.reply.clone().map_err(ItineraryError::Upstream)
    }
}

pub struct TestApp {
    pub stub: Arc<StubGenerator>,
    pub config: AppConfig,
}

impl TestApp {
    pub fn new(stub: Arc<StubGenerator>) -> Self {
        let config = AppConfig {
            gemini: GeminiConfig {
                api_key: stub
                    .is_configured()
                    .then(|| "AIzaTestKey00001234".to_string()),
                ..GeminiConfig::default()
            },
            ..AppConfig::default()
        };

        Self { stub, config }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<
                impl actix_web::body::MessageBody,
            >,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let generator = ItineraryGenerator::new(self.stub.clone());

        App::new()
            .app_data(web::Data::new(generator))
            .app_data(web::Data::new(self.config.clone()))
            .wrap(routes::cors_policy(&self.config))
            .wrap(Logger::default())
            .configure(routes::configure)
    }
}

/// A well-formed model reply with `day_count` days numbered from 1.
pub fn itinerary_document(day_count: u32) -> String {
    let days: Vec<_> = (1..=day_count)
        .map(|n| {
            json!({
                "dayNumber": n,
                "breakfast": {"name": format!("Boulangerie {}", n), "description": "Fresh pastries"},
                "lunch": {"name": format!("Bistro {}", n), "description": "Daily set menu"},
                "dinner": {"name": format!("Brasserie {}", n), "description": "Classic French dishes"},
                "activity": {"name": format!("Walk {}", n), "description": "Explore the neighborhood"}
            })
        })
        .collect();

    json!({
        "hotel": {
            "name": "Hotel Lumen",
            "location": "Le Marais",
            "description": "Boutique hotel within walking distance of the main sights."
        },
        "days": days
    })
    .to_string()
}

pub fn trip_body(destination: &str, start_date: &str, end_date: &str) -> serde_json::Value {
    json!({
        "destination": destination,
        "start_date": start_date,
        "end_date": end_date
    })
}
