use actix_web::{web, HttpResponse, Responder};

use crate::services::options_service::trip_options;

#[derive(serde::Deserialize)]
pub struct OptionsQuery {
    search: Option<String>,
}

/*
    /api/admin/trip-options?search=
*/
pub async fn get_trip_options(params: web::Query<OptionsQuery>) -> impl Responder {
    HttpResponse::Ok().json(trip_options(params.search.as_deref().unwrap_or("")))
}
