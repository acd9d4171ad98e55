pub mod config;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use actix_web::web;

use crate::config::AppConfig;
use crate::services::auth_service::JwtAuthClient;
use crate::services::country_service::{CountryCatalog, RestCountriesClient};
use crate::services::submission_service::TripSubmitter;
use crate::services::trip_api::HttpTripApi;

/// Shared state handed to every worker.
#[derive(Clone)]
pub struct AppState {
    pub catalog: web::Data<CountryCatalog>,
    pub submitter: web::Data<TripSubmitter>,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Result<Self, url::ParseError> {
        let http = reqwest::Client::new();
        let countries = RestCountriesClient::new(http.clone(), config.countries_url.clone());
        let trip_api = HttpTripApi::new(http, &config.trip_api_url)?;
        let auth = JwtAuthClient::new(config.jwt_secret.clone());

        Ok(Self::new(
            CountryCatalog::new(Arc::new(countries)),
            TripSubmitter::new(Arc::new(auth), Arc::new(trip_api)),
        ))
    }

    pub fn new(catalog: CountryCatalog, submitter: TripSubmitter) -> Self {
        AppState {
            catalog: web::Data::new(catalog),
            submitter: web::Data::new(submitter),
        }
    }

    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.catalog.clone())
            .app_data(self.submitter.clone())
            .route("/health", web::get().to(routes::health::health_check))
            .service(web::scope("/api").configure(routes::admin::config));
    }
}
