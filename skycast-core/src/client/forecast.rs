use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::client::{Clock, FORECAST_API_BASE, SystemClock};
use crate::error::{Error, Result};
use crate::model::ForecastResponse;

use super::WeatherSource;

/// Current-conditions fields requested from the forecast endpoint. These are
/// a contract with the remote schema and must match verbatim.
const CURRENT_FIELDS: &str = "temperature_2m,rain,wind_speed_10m,is_day,apparent_temperature,showers,relative_humidity_2m,precipitation,weather_code";

/// Hourly arrays requested from the forecast endpoint.
const HOURLY_FIELDS: &str = "precipitation_probability,uv_index,temperature_2m";

/// Client for the Open-Meteo forecast endpoint.
///
/// Stateless: every call is one independent GET, idempotent with respect to
/// the remote service. Timeouts and cancellation are the caller's concern.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: Client,
    base_url: String,
    clock: Arc<dyn Clock>,
}

impl ForecastClient {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Use a custom time source for the `current_hour_index` stamp.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            http: Client::new(),
            base_url: FORECAST_API_BASE.to_string(),
            clock,
        }
    }

    /// Point the client at a different base URL, e.g. a mock server.
    #[cfg(test)]
    fn with_base_url(base_url: &str, clock: Arc<dyn Clock>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.to_string(),
            clock,
        }
    }

    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<ForecastResponse> {
        let url = format!("{}/forecast", self.base_url);
        debug!("fetching forecast for {latitude},{longitude}");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
                ("forecast_days", "1".to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(Error::RequestFailed(status));
        }

        let body = res.text().await?;
        let mut parsed: ForecastResponse = serde_json::from_str(&body)?;
        parsed.current_hour_index = self.clock.local_hour();

        Ok(parsed)
    }
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherSource for ForecastClient {
    async fn fetch_weather(&self, latitude: f64, longitude: f64) -> Result<ForecastResponse> {
        self.fetch(latitude, longitude).await
    }
}
