use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};
use env_logger::Env;

use trip_planner_admin::{config::AppConfig, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let state = AppState::from_config(&config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    log::info!(
        "Countries from {}, trips via {}",
        config.countries_url,
        config.trip_api_url
    );
    log::info!("Attempting to bind to {}:{}", config.host, config.port);

    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(|cfg| state.configure(cfg))
    })
    .bind((config.host.clone(), config.port))?
    .run()
    .await
}
