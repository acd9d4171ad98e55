use std::fmt;

use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::Client as ReqwestClient;
use url::Url;

use crate::models::trip::{CreateTripRequest, CreateTripResponse};

pub const CREATE_TRIP_PATH: &str = "api/create-trip";

#[derive(Debug)]
pub enum TripApiError {
    Request(String),
    Status(u16),
    Decode(String),
}

impl fmt::Display for TripApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripApiError::Request(e) => write!(f, "Failed to reach trip API: {}", e),
            TripApiError::Status(code) => write!(f, "Trip API returned error status: {}", code),
            TripApiError::Decode(e) => write!(f, "Failed to parse trip API response: {}", e),
        }
    }
}

pub trait TripApi: Send + Sync {
    fn create_trip(
        &self,
        request: CreateTripRequest,
    ) -> BoxFuture<'_, Result<CreateTripResponse, TripApiError>>;
}

pub struct HttpTripApi {
    client: ReqwestClient,
    endpoint: Url,
}

impl HttpTripApi {
    /// `base_url` is the backend root; the create-trip path is appended.
    pub fn new(client: ReqwestClient, base_url: &Url) -> Result<Self, url::ParseError> {
        Ok(Self {
            client,
            endpoint: base_url.join(CREATE_TRIP_PATH)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl TripApi for HttpTripApi {
    fn create_trip(
        &self,
        request: CreateTripRequest,
    ) -> BoxFuture<'_, Result<CreateTripResponse, TripApiError>> {
        async move {
            let response = self
                .client
                .post(self.endpoint.clone())
                .json(&request)
                .send()
                .await
                .map_err(|e| TripApiError::Request(e.to_string()))?;

            if !response.status().is_success() {
                return Err(TripApiError::Status(response.status().as_u16()));
            }

            response
                .json::<CreateTripResponse>()
                .await
                .map_err(|e| TripApiError::Decode(e.to_string()))
        }
        .boxed()
    }
}
