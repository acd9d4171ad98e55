use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex};

use crate::models::trip::{CreateTripRequest, CreateTripResponse, TripCreated, TripFormData};
use crate::services::auth_service::{AuthClient, AuthError};
use crate::services::form_service::{validate, FormError};
use crate::services::trip_api::{TripApi, TripApiError};

const ANONYMOUS_SESSION: &str = "anonymous";

#[derive(Debug)]
pub enum SubmitError {
    Invalid(FormError),
    Busy,
    Unauthenticated,
    Auth(AuthError),
    Api(TripApiError),
    MissingId,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Invalid(e) => write!(f, "{}", e),
            SubmitError::Busy => write!(f, "A submission is already in progress"),
            SubmitError::Unauthenticated => write!(f, "User not authenticated"),
            SubmitError::Auth(e) => write!(f, "{}", e),
            SubmitError::Api(e) => write!(f, "{}", e),
            SubmitError::MissingId => write!(f, "Trip API response did not include an id"),
        }
    }
}

/// Loading flag per session. While a key is held, further submissions for
/// that key are turned away.
#[derive(Default)]
pub struct SubmissionGate {
    in_flight: Mutex<HashSet<String>>,
}

pub struct GateGuard<'a> {
    gate: &'a SubmissionGate,
    key: String,
}

impl SubmissionGate {
    pub fn try_acquire(&self, key: &str) -> Option<GateGuard<'_>> {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        if !in_flight.insert(key.to_string()) {
            return None;
        }
        Some(GateGuard {
            gate: self,
            key: key.to_string(),
        })
    }

    pub fn is_loading(&self, key: &str) -> bool {
        self.in_flight
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(key)
    }
}

impl Drop for GateGuard<'_> {
    fn drop(&mut self) {
        self.gate
            .in_flight
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&self.key);
    }
}

pub struct TripSubmitter {
    auth: Arc<dyn AuthClient>,
    api: Arc<dyn TripApi>,
    gate: SubmissionGate,
}

impl TripSubmitter {
    pub fn new(auth: Arc<dyn AuthClient>, api: Arc<dyn TripApi>) -> Self {
        Self {
            auth,
            api,
            gate: SubmissionGate::default(),
        }
    }

    /// Validate, resolve the user, then ask the backend for a trip. Only
    /// validation failures are meant for the admin; the rest are logged.
    pub async fn submit(
        &self,
        form: TripFormData,
        token: Option<String>,
    ) -> Result<TripCreated, SubmitError> {
        validate(&form).map_err(SubmitError::Invalid)?;

        let session = token.as_deref().unwrap_or(ANONYMOUS_SESSION);
        let _loading = self.gate.try_acquire(session).ok_or(SubmitError::Busy)?;

        let user = match self.auth.current_user(token.clone()).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                log::error!("User not authenticated");
                return Err(SubmitError::Unauthenticated);
            }
            Err(err) => {
                log::error!("Failed to look up current user: {}", err);
                return Err(SubmitError::Auth(err));
            }
        };

        let request = CreateTripRequest::new(form, user.user_id);
        log::info!(
            "Creating {}-day trip to {} for user {}",
            request.number_of_days,
            request.country,
            request.user_id
        );

        match self.api.create_trip(request).await {
            Ok(CreateTripResponse { id: Some(id) }) if !id.is_empty() => Ok(TripCreated::new(id)),
            Ok(_) => {
                log::error!("Failed to generate a trip");
                Err(SubmitError::MissingId)
            }
            Err(err) => {
                log::error!("Error generating trip: {}", err);
                Err(SubmitError::Api(err))
            }
        }
    }
}
