use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::middleware::auth_context::BearerToken;
use crate::models::trip::TripFormData;
use crate::services::submission_service::{SubmitError, TripSubmitter};

/*
    /api/admin/trips
*/
pub async fn create(
    submitter: web::Data<TripSubmitter>,
    token: BearerToken,
    input: web::Json<TripFormData>,
) -> impl Responder {
    match submitter.submit(input.into_inner(), token.into_inner()).await {
        Ok(created) => HttpResponse::Ok().json(created),
        Err(SubmitError::Invalid(err)) => {
            HttpResponse::BadRequest().json(json!({ "error": err.to_string(), "fields": err.fields() }))
        }
        Err(SubmitError::Busy) => HttpResponse::Conflict().finish(),
        Err(SubmitError::Unauthenticated) | Err(SubmitError::Auth(_)) => {
            HttpResponse::Unauthorized().finish()
        }
        Err(SubmitError::Api(_)) | Err(SubmitError::MissingId) => HttpResponse::BadGateway().finish(),
    }
}
