use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
///
/// Values are not validated here; out-of-range coordinates are passed through
/// to the remote service and its answer (error or data) propagates unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Weather payload returned by the forecast endpoint.
///
/// `current_hour_index` is not part of the wire format: it is stamped after
/// parsing with the caller's local wall-clock hour (0–23) so a consumer can
/// locate "now" inside the hourly arrays. It has no relationship to the
/// `hourly.time` entries, which follow the timezone the API resolved from the
/// coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub current: CurrentWeather,
    pub hourly: HourlyForecast,
    #[serde(default)]
    pub current_hour_index: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature_2m: f64,
    pub apparent_temperature: f64,
    pub relative_humidity_2m: u8,
    pub precipitation: f64,
    pub rain: f64,
    pub showers: f64,
    pub wind_speed_10m: f64,
    pub is_day: u8,
    pub weather_code: i32,
}

/// Time-indexed forecast arrays; all entries share `time`'s length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyForecast {
    pub time: Vec<String>,
    pub precipitation_probability: Vec<u8>,
    pub uv_index: Vec<f64>,
    pub temperature_2m: Vec<f64>,
}

/// Air-quality payload; returned exactly as parsed, no augmentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirQualityResponse {
    pub current: CurrentAirQuality,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAirQuality {
    pub us_aqi: f64,
}
