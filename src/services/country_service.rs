use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::Client as ReqwestClient;
use tokio::sync::OnceCell;
use url::Url;

use crate::models::country::{Country, RestCountry};

pub const REST_COUNTRIES_URL: &str = "https://restcountries.com/v3.1/all";

#[derive(Debug)]
pub enum CountryError {
    Request(String),
    Status(u16),
    Decode(String),
}

impl fmt::Display for CountryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountryError::Request(e) => write!(f, "Failed to request countries: {}", e),
            CountryError::Status(code) => write!(f, "Countries API returned error status: {}", code),
            CountryError::Decode(e) => write!(f, "Failed to parse countries: {}", e),
        }
    }
}

pub trait CountryProvider: Send + Sync {
    fn fetch_countries(&self) -> BoxFuture<'_, Result<Vec<Country>, CountryError>>;
}

pub struct RestCountriesClient {
    client: ReqwestClient,
    url: Url,
}

impl RestCountriesClient {
    pub fn new(client: ReqwestClient, url: Url) -> Self {
        Self { client, url }
    }
}

impl CountryProvider for RestCountriesClient {
    fn fetch_countries(&self) -> BoxFuture<'_, Result<Vec<Country>, CountryError>> {
        async move {
            let response = self
                .client
                .get(self.url.clone())
                .send()
                .await
                .map_err(|e| CountryError::Request(e.to_string()))?;

            if !response.status().is_success() {
                return Err(CountryError::Status(response.status().as_u16()));
            }

            let records = response
                .json::<Vec<RestCountry>>()
                .await
                .map_err(|e| CountryError::Decode(e.to_string()))?;

            log::info!("Loaded {} countries from {}", records.len(), self.url);
            Ok(records.into_iter().map(Country::from).collect())
        }
        .boxed()
    }
}

/// Country list shared by every page view. The first successful load is
/// kept for the life of the process; a failed load leaves the cell empty.
pub struct CountryCatalog {
    provider: Arc<dyn CountryProvider>,
    countries: OnceCell<Arc<Vec<Country>>>,
}

impl CountryCatalog {
    pub fn new(provider: Arc<dyn CountryProvider>) -> Self {
        Self {
            provider,
            countries: OnceCell::new(),
        }
    }

    pub async fn countries(&self) -> Result<Arc<Vec<Country>>, CountryError> {
        self.countries
            .get_or_try_init(|| async {
                self.provider.fetch_countries().await.map(Arc::new)
            })
            .await
            .cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.countries.initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubProvider {
        calls: AtomicUsize,
        fail_first: bool,
    }

    impl CountryProvider for StubProvider {
        fn fetch_countries(&self) -> BoxFuture<'_, Result<Vec<Country>, CountryError>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            let fail = self.fail_first && call == 0;
            async move {
                if fail {
                    return Err(CountryError::Status(503));
                }
                Ok(vec![Country {
                    name: "🇳🇵 Nepal".to_string(),
                    coordinates: [28.0, 84.0],
                    value: "Nepal".to_string(),
                    open_street_map: None,
                }])
            }
            .boxed()
        }
    }

    #[test]
    fn test_catalog_loads_once() {
        let provider = Arc::new(StubProvider {
            calls: AtomicUsize::new(0),
            fail_first: false,
        });
        let catalog = CountryCatalog::new(provider.clone());

        tokio_test::block_on(async {
            assert!(!catalog.is_loaded());
            assert_eq!(catalog.countries().await.unwrap().len(), 1);
            assert_eq!(catalog.countries().await.unwrap().len(), 1);
        });
        assert!(catalog.is_loaded());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_load_is_not_kept() {
        let provider = Arc::new(StubProvider {
            calls: AtomicUsize::new(0),
            fail_first: true,
        });
        let catalog = CountryCatalog::new(provider.clone());

        tokio_test::block_on(async {
            assert!(matches!(
                catalog.countries().await,
                Err(CountryError::Status(503))
            ));
            assert!(catalog.countries().await.is_ok());
        });
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }
}
