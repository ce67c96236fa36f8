//! REST Countries HTTP adapter
//!
//! Implements the [`CountrySource`] port against the public REST
//! Countries v3.1 API (or any mirror serving the same shape).

use async_trait::async_trait;
use atlas_application::ports::country_source::{CountrySource, SourceError};
use atlas_domain::{Country, CountryCode};
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, warn};

use super::error::RestCountriesError;

/// Default public endpoint
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Default transport timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = concat!("country-atlas/", env!("CARGO_PKG_VERSION"));

/// HTTP adapter over the REST Countries API
///
/// `Client` keeps an internal connection pool, so clones are cheap and
/// the border fan-out reuses connections instead of opening one per
/// lookup.
#[derive(Debug, Clone)]
pub struct RestCountriesSource {
    base_url: Url,
    client: Client,
}

impl RestCountriesSource {
    /// Connect to the default public endpoint
    pub fn new() -> Result<Self, RestCountriesError> {
        Self::with_base_url(DEFAULT_BASE_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Connect to a specific endpoint, e.g. a mirror or a test server
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, RestCountriesError> {
        // Url::join drops the last path segment unless it ends in a slash
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url =
            Url::parse(&normalized).map_err(|e| RestCountriesError::BaseUrl(e.to_string()))?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { base_url, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url, SourceError> {
        self.base_url
            .join(path)
            .map_err(|e| SourceError::Unreachable(e.to_string()))
    }
}

#[async_trait]
impl CountrySource for RestCountriesSource {
    async fn fetch_all(&self) -> Result<Vec<Country>, SourceError> {
        let url = self.endpoint("all")?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        response
            .json::<Vec<Country>>()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))
    }

    async fn fetch_by_code(&self, code: &CountryCode) -> Option<Country> {
        let url = match self.endpoint(&format!("alpha/{}", code.as_str())) {
            Ok(url) => url,
            Err(e) => {
                warn!("Skipping lookup for {}: {}", code, e);
                return None;
            }
        };
        debug!("GET {}", url);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Lookup for {} failed: {}", code, e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            debug!("Lookup for {} answered HTTP {}", code, status.as_u16());
            return None;
        }

        // The alpha endpoint wraps its record in a one-element array
        match response.json::<Vec<Country>>().await {
            Ok(mut records) if !records.is_empty() => Some(records.remove(0)),
            Ok(_) => {
                debug!("Lookup for {} answered an empty payload", code);
                None
            }
            Err(e) => {
                warn!("Undecodable payload for {}: {}", code, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn record(common: &str, cca3: &str, region: &str) -> serde_json::Value {
        json!({
            "name": { "common": common, "official": common },
            "cca3": cca3,
            "region": region,
            "population": 1_000_000
        })
    }

    async fn source_for(server: &MockServer) -> RestCountriesSource {
        let base = format!("{}/v3.1", server.uri());
        RestCountriesSource::with_base_url(&base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_rejects_unparseable_base_url() {
        let result = RestCountriesSource::with_base_url("not a url", Duration::from_secs(5));
        assert!(matches!(result, Err(RestCountriesError::BaseUrl(_))));
    }

    #[tokio::test]
    async fn test_fetch_all_decodes_collection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3.1/all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                record("Germany", "DEU", "Europe"),
                record("Ghana", "GHA", "Africa"),
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let source = source_for(&server).await;
        let countries = source.fetch_all().await.unwrap();

        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].name.common, "Germany");
        assert_eq!(countries[1].cca3, CountryCode::new("GHA"));
    }

    #[tokio::test]
    async fn test_fetch_all_maps_http_failure_to_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3.1/all"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let source = source_for(&server).await;
        let err = source.fetch_all().await.unwrap_err();

        assert!(matches!(err, SourceError::Status(503)));
    }

    #[tokio::test]
    async fn test_fetch_all_maps_bad_payload_to_decode() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3.1/all"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let source = source_for(&server).await;
        let err = source.fetch_all().await.unwrap_err();

        assert!(matches!(err, SourceError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_by_code_unwraps_single_element_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3.1/alpha/DEU"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([record("Germany", "DEU", "Europe")])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let source = source_for(&server).await;
        let country = source.fetch_by_code(&CountryCode::new("deu")).await;

        assert_eq!(country.unwrap().name.common, "Germany");
    }

    #[tokio::test]
    async fn test_fetch_by_code_soft_fails_on_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3.1/alpha/XYZ123"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let source = source_for(&server).await;
        let country = source.fetch_by_code(&CountryCode::new("xyz123")).await;

        assert!(country.is_none());
    }

    #[tokio::test]
    async fn test_fetch_by_code_soft_fails_on_empty_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3.1/alpha/AAA"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let source = source_for(&server).await;
        let country = source.fetch_by_code(&CountryCode::new("AAA")).await;

        assert!(country.is_none());
    }

    #[tokio::test]
    async fn test_fetch_by_code_soft_fails_on_bad_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3.1/alpha/AAA"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let source = source_for(&server).await;
        let country = source.fetch_by_code(&CountryCode::new("AAA")).await;

        assert!(country.is_none());
    }

    #[tokio::test]
    async fn test_fetch_by_code_soft_fails_when_unreachable() {
        // Bind-then-drop leaves a port with nothing listening on it
        let server = MockServer::start().await;
        let base = format!("{}/v3.1", server.uri());
        drop(server);

        let source =
            RestCountriesSource::with_base_url(&base, Duration::from_millis(500)).unwrap();
        let country = source.fetch_by_code(&CountryCode::new("DEU")).await;

        assert!(country.is_none());
    }
}
