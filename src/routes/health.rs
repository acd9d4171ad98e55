use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::services::country_service::CountryCatalog;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

// Reports without triggering a country fetch.
pub async fn health_check(catalog: web::Data<CountryCatalog>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let countries = if catalog.is_loaded() {
        ServiceStatus {
            status: "ok".to_string(),
            details: None,
        }
    } else {
        ServiceStatus {
            status: "pending".to_string(),
            details: Some("Country list not loaded yet".to_string()),
        }
    };
    health.services.insert("countries".to_string(), countries);

    HttpResponse::Ok().json(health)
}
