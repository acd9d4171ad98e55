use std::env;
use std::fmt;

use url::Url;

use crate::services::country_service::REST_COUNTRIES_URL;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const TRIP_API_URL: &str = "http://localhost:3000/";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub countries_url: Url,
    pub trip_api_url: Url,
    pub jwt_secret: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidUrl { var: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidUrl { var, reason } => write!(f, "{} is not a valid URL: {}", var, reason),
        }
    }
}

impl std::error::Error for ConfigError {}

fn url_var(var: &'static str, default: &str) -> Result<Url, ConfigError> {
    let raw = env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl {
        var,
        reason: e.to_string(),
    })
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| HOST.to_string());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| PORT.to_string())
            .parse()
            .unwrap_or(PORT);

        let countries_url = url_var("COUNTRIES_API_URL", REST_COUNTRIES_URL)?;

        // Joined with a relative path later, so the base must end in '/'.
        let mut trip_api_url = url_var("TRIP_API_URL", TRIP_API_URL)?;
        if !trip_api_url.path().ends_with('/') {
            let path = format!("{}/", trip_api_url.path());
            trip_api_url.set_path(&path);
        }

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default secret");
            "default_secret".to_string()
        });

        Ok(AppConfig {
            host,
            port,
            countries_url,
            trip_api_url,
            jwt_secret,
        })
    }
}
