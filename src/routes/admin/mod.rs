use actix_web::web;

use crate::routes::{countries, map, options, trip};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/countries", web::get().to(countries::get_countries))
            .route("/trip-options", web::get().to(options::get_trip_options))
            .route("/map-preview", web::get().to(map::preview))
            .route("/trips", web::post().to(trip::create)),
    );
}
