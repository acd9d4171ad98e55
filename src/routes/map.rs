use actix_web::{web, HttpResponse, Responder};

use crate::services::country_service::CountryCatalog;
use crate::services::map_service::build_map_preview;

#[derive(serde::Deserialize)]
pub struct MapQuery {
    country: Option<String>,
}

/*
    /api/admin/map-preview?country=
*/
pub async fn preview(
    catalog: web::Data<CountryCatalog>,
    params: web::Query<MapQuery>,
) -> impl Responder {
    match catalog.countries().await {
        Ok(countries) => HttpResponse::Ok().json(build_map_preview(
            &countries,
            params.country.as_deref().unwrap_or(""),
        )),
        Err(err) => {
            log::error!("Failed to load countries for map preview: {}", err);
            HttpResponse::BadGateway().finish()
        }
    }
}
