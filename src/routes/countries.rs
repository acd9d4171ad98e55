use actix_web::{web, HttpResponse, Responder};

use crate::services::country_service::CountryCatalog;
use crate::services::form_service::filter_countries;

#[derive(serde::Deserialize)]
pub struct QueryParams {
    limit: Option<u16>,
    search: Option<String>,
}

/*
    /api/admin/countries?search=
*/
pub async fn get_countries(
    catalog: web::Data<CountryCatalog>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let countries = match catalog.countries().await {
        Ok(countries) => countries,
        Err(err) => {
            log::error!("Failed to load countries: {}", err);
            return HttpResponse::BadGateway().finish();
        }
    };

    let mut matches = filter_countries(&countries, params.search.as_deref().unwrap_or(""));
    if let Some(limit) = params.limit {
        matches.truncate(limit.into());
    }

    HttpResponse::Ok().json(matches)
}
