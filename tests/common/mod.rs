#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use actix_web::App;
use chrono::{Duration, Utc};
use futures::future::{ready, BoxFuture};
use futures::FutureExt;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use trip_planner_admin::models::country::Country;
use trip_planner_admin::models::trip::{CreateTripRequest, CreateTripResponse};
use trip_planner_admin::services::auth_service::{Claims, JwtAuthClient};
use trip_planner_admin::services::country_service::{
    CountryCatalog, CountryError, CountryProvider,
};
use trip_planner_admin::services::submission_service::TripSubmitter;
use trip_planner_admin::services::trip_api::{TripApi, TripApiError};
use trip_planner_admin::AppState;

pub const TEST_SECRET: &str = "test_secret";

pub struct StubCountries {
    pub fail: bool,
}

impl CountryProvider for StubCountries {
    fn fetch_countries(&self) -> BoxFuture<'_, Result<Vec<Country>, CountryError>> {
        let result = if self.fail {
            Err(CountryError::Status(503))
        } else {
            Ok(test_countries())
        };
        ready(result).boxed()
    }
}

pub struct RecordingTripApi {
    pub id: Option<String>,
    pub requests: Mutex<Vec<CreateTripRequest>>,
}

impl RecordingTripApi {
    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl TripApi for RecordingTripApi {
    fn create_trip(
        &self,
        request: CreateTripRequest,
    ) -> BoxFuture<'_, Result<CreateTripResponse, TripApiError>> {
        self.requests.lock().unwrap().push(request);
        ready(Ok(CreateTripResponse {
            id: self.id.clone(),
        }))
        .boxed()
    }
}

pub struct TestApp {
    pub state: AppState,
    pub trip_api: Arc<RecordingTripApi>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with(Some("trip_123"), false)
    }

    pub fn with(trip_id: Option<&str>, countries_fail: bool) -> Self {
        let trip_api = Arc::new(RecordingTripApi {
            id: trip_id.map(str::to_string),
            requests: Mutex::new(Vec::new()),
        });
        let state = AppState::new(
            CountryCatalog::new(Arc::new(StubCountries {
                fail: countries_fail,
            })),
            TripSubmitter::new(Arc::new(JwtAuthClient::new(TEST_SECRET)), trip_api.clone()),
        );

        Self { state, trip_api }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().configure(|cfg| self.state.configure(cfg))
    }
}

pub fn country(flag: &str, value: &str, coordinates: [f64; 2]) -> Country {
    Country {
        name: format!("{} {}", flag, value),
        coordinates,
        value: value.to_string(),
        open_street_map: None,
    }
}

pub fn test_countries() -> Vec<Country> {
    vec![
        country("🇫🇷", "France", [46.0, 2.0]),
        country("🇫🇮", "Finland", [64.0, 26.0]),
        country("🇮🇪", "Ireland", [53.0, -8.0]),
        country("🇯🇵", "Japan", [36.0, 138.0]),
        country("🇵🇪", "Peru", [-10.0, -76.0]),
    ]
}

pub fn bearer_token(secret: &str, user_id: &str) -> String {
    let now = Utc::now();
    let claims = Claims {
        sub: "admin@example.com".to_string(),
        exp: (now + Duration::hours(1)).timestamp() as usize,
        iat: now.timestamp() as usize,
        user_id: user_id.to_string(),
        role: Some("admin".to_string()),
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap();
    format!("Bearer {}", token)
}

pub fn valid_form() -> serde_json::Value {
    serde_json::json!({
        "country": "Japan",
        "travelStyle": "Cultural",
        "interest": "Food & Culinary",
        "budget": "Luxury",
        "duration": 5,
        "groupType": "Couple"
    })
}
