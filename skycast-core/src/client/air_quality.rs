use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::client::AIR_QUALITY_API_BASE;
use crate::error::{Error, Result};
use crate::model::AirQualityResponse;

use super::AirQualitySource;

/// Client for the Open-Meteo air-quality endpoint.
///
/// Simpler sibling of [`crate::client::ForecastClient`]: one GET, status
/// check, parse, return. The payload is handed back untouched.
#[derive(Debug, Clone)]
pub struct AirQualityClient {
    http: Client,
    base_url: String,
}

impl AirQualityClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
            base_url: AIR_QUALITY_API_BASE.to_string(),
        }
    }

    /// Point the client at a different base URL, e.g. a mock server.
    #[cfg(test)]
    fn with_base_url(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.to_string(),
        }
    }

    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<AirQualityResponse> {
        let url = format!("{}/air-quality", self.base_url);
        debug!("fetching air quality for {latitude},{longitude}");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", "us_aqi".to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(Error::RequestFailed(status));
        }

        let body = res.text().await?;
        let parsed: AirQualityResponse = serde_json::from_str(&body)?;

        Ok(parsed)
    }
}

impl Default for AirQualityClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AirQualitySource for AirQualityClient {
    async fn fetch_air_quality(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<AirQualityResponse> {
        self.fetch(latitude, longitude).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn sends_the_fixed_query_contract() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/air-quality")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("latitude".into(), "52.52".into()),
                Matcher::UrlEncoded("longitude".into(), "13.41".into()),
                Matcher::UrlEncoded("current".into(), "us_aqi".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"current": {"us_aqi": 42}}"#)
            .create_async()
            .await;

        let client = AirQualityClient::with_base_url(&server.url());
        client
            .fetch(52.52, 13.41)
            .await
            .expect("fetch should succeed");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn returns_the_payload_unchanged() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/air-quality")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"current": {"us_aqi": 42}}"#)
            .create_async()
            .await;

        let client = AirQualityClient::with_base_url(&server.url());
        let res = client.fetch(52.52, 13.41).await.expect("fetch should succeed");

        assert!((res.current.us_aqi - 42.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn non_success_status_is_a_request_failure() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/air-quality")
            .match_query(Matcher::Any)
            .with_status(404)
            .with_body("ignored")
            .create_async()
            .await;

        let client = AirQualityClient::with_base_url(&server.url());
        let err = client.fetch(1.0, 2.0).await.unwrap_err();

        assert!(err.to_string().contains("Not Found"));
        assert!(matches!(err, Error::RequestFailed(_)));
    }

    #[tokio::test]
    async fn missing_current_record_is_a_parse_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/air-quality")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .create_async()
            .await;

        let client = AirQualityClient::with_base_url(&server.url());
        let err = client.fetch(1.0, 2.0).await.unwrap_err();

        assert!(matches!(err, Error::Parse(_)));
    }
}
