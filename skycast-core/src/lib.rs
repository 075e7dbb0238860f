//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Configuration handling (saved default location)
//! - Fetch clients for the Open-Meteo forecast and air-quality APIs
//! - Shared domain models (responses, coordinates) and error types
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::{
    AirQualityClient, AirQualitySource, Clock, ForecastClient, SystemClock, WeatherSource,
};
pub use config::{Config, SavedLocation};
pub use error::{Error, Result};
pub use model::{
    AirQualityResponse, Coordinates, CurrentAirQuality, CurrentWeather, ForecastResponse,
    HourlyForecast,
};
