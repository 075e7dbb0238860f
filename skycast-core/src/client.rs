use std::fmt::Debug;

use async_trait::async_trait;
use chrono::{Local, Timelike};

use crate::error::Result;
use crate::model::{AirQualityResponse, ForecastResponse};

pub mod air_quality;
pub mod forecast;

pub use air_quality::AirQualityClient;
pub use forecast::ForecastClient;

/// Base URL of the Open-Meteo forecast API.
pub const FORECAST_API_BASE: &str = "https://api.open-meteo.com/v1";

/// Base URL of the Open-Meteo air-quality API.
pub const AIR_QUALITY_API_BASE: &str = "https://air-quality-api.open-meteo.com/v1";

/// Something that can fetch current weather for a coordinate pair.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch_weather(&self, latitude: f64, longitude: f64) -> Result<ForecastResponse>;
}

/// Something that can fetch a current air-quality reading for a coordinate pair.
#[async_trait]
pub trait AirQualitySource: Send + Sync + Debug {
    async fn fetch_air_quality(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<AirQualityResponse>;
}

/// Source of the caller-local wall-clock hour.
///
/// Injected into [`ForecastClient`] so tests can pin "now" instead of reading
/// the real system clock.
pub trait Clock: Send + Sync + Debug {
    /// Current local hour, 0–23.
    fn local_hour(&self) -> u32;
}

/// Reads the host clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn local_hour(&self) -> u32 {
        Local::now().hour()
    }
}
