use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use inquire::{CustomType, Text};
use skycast_core::{
    AirQualityClient, AirQualitySource, Config, Coordinates, ForecastClient, SavedLocation,
    WeatherSource,
};

use crate::format;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather and air quality from Open-Meteo")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively choose and save a default location.
    Configure,

    /// Show current weather and air quality.
    Show {
        /// Latitude in decimal degrees; requires --lon.
        #[arg(long, requires = "lon")]
        lat: Option<f64>,

        /// Longitude in decimal degrees; requires --lat.
        #[arg(long, requires = "lat")]
        lon: Option<f64>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { lat, lon } => show(lat, lon).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let name = Text::new("Location name:")
        .with_help_message("Free-form label, e.g. \"Berlin\"")
        .prompt()?;

    let latitude = CustomType::<f64>::new("Latitude:")
        .with_help_message("Decimal degrees, south negative")
        .prompt()?;

    let longitude = CustomType::<f64>::new("Longitude:")
        .with_help_message("Decimal degrees, west negative")
        .prompt()?;

    config.set_default_location(SavedLocation {
        name: name.clone(),
        latitude,
        longitude,
    });
    config.save()?;

    println!("Saved default location: {name} ({latitude}, {longitude})");
    Ok(())
}

async fn show(lat: Option<f64>, lon: Option<f64>) -> anyhow::Result<()> {
    let (label, coords) = resolve_coordinates(lat, lon)?;

    let weather = ForecastClient::new();
    let air = AirQualityClient::new();

    let forecast = weather
        .fetch_weather(coords.latitude, coords.longitude)
        .await
        .context("Failed to fetch weather")?;
    let air_quality = air
        .fetch_air_quality(coords.latitude, coords.longitude)
        .await
        .context("Failed to fetch air quality")?;

    println!("skycast — {}", Local::now().format("%a %Y-%m-%d %H:%M"));
    print!("{}", format::report(&label, &forecast, &air_quality));
    Ok(())
}

/// Coordinates from flags when given, from the saved default otherwise.
fn resolve_coordinates(
    lat: Option<f64>,
    lon: Option<f64>,
) -> anyhow::Result<(String, Coordinates)> {
    if let (Some(latitude), Some(longitude)) = (lat, lon) {
        return Ok((
            format!("{latitude}, {longitude}"),
            Coordinates {
                latitude,
                longitude,
            },
        ));
    }

    let config = Config::load()?;
    let location = config.require_default_location()?;
    Ok((location.name.clone(), location.coordinates()))
}
