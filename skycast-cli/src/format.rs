use skycast_core::{AirQualityResponse, ForecastResponse};

/// Render the full report: current conditions, AQI, hourly outlook.
pub fn report(label: &str, forecast: &ForecastResponse, air: &AirQualityResponse) -> String {
    let current = &forecast.current;
    let day_part = if current.is_day == 1 { "day" } else { "night" };

    let mut out = format!("Weather for {label} ({day_part}):\n");
    out.push_str(&format!(
        "  {}, {:.1}°C (feels like {:.1}°C)\n",
        describe_weather_code(current.weather_code),
        current.temperature_2m,
        current.apparent_temperature,
    ));
    out.push_str(&format!(
        "  Humidity: {}%  Wind: {:.1} km/h  Precipitation: {:.1} mm (rain {:.1}, showers {:.1})\n",
        current.relative_humidity_2m,
        current.wind_speed_10m,
        current.precipitation,
        current.rain,
        current.showers,
    ));
    out.push_str(&format!(
        "  US AQI: {:.0} ({})\n",
        air.current.us_aqi,
        describe_us_aqi(air.current.us_aqi),
    ));
    out.push('\n');
    out.push_str(&hourly_outlook(forecast));
    out
}

/// The next few hours, starting at the hour stamped into the response.
fn hourly_outlook(forecast: &ForecastResponse) -> String {
    let hourly = &forecast.hourly;
    let start = forecast.current_hour_index as usize;

    let mut out = String::from("Hourly outlook:\n");
    if start >= hourly.time.len() {
        out.push_str("  (no hourly data for the current hour)\n");
        return out;
    }

    for i in start..(start + 6).min(hourly.time.len()) {
        let (Some(temp), Some(prob), Some(uv)) = (
            hourly.temperature_2m.get(i),
            hourly.precipitation_probability.get(i),
            hourly.uv_index.get(i),
        ) else {
            break;
        };

        let time = hourly.time[i].split('T').nth(1).unwrap_or(&hourly.time[i]);
        out.push_str(&format!(
            "  {time}  {temp:.1}°C  precip {prob}%  UV {uv:.1}\n"
        ));
    }

    out
}

/// WMO weather interpretation codes, as used by Open-Meteo.
fn describe_weather_code(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 | 48 => "Fog",
        51 | 53 | 55 => "Drizzle",
        56 | 57 => "Freezing drizzle",
        61 | 63 | 65 => "Rain",
        66 | 67 => "Freezing rain",
        71 | 73 | 75 => "Snow",
        77 => "Snow grains",
        80 | 81 | 82 => "Rain showers",
        85 | 86 => "Snow showers",
        95 => "Thunderstorm",
        96 | 99 => "Thunderstorm with hail",
        _ => "Unknown",
    }
}

/// EPA category names for the US AQI scale.
fn describe_us_aqi(aqi: f64) -> &'static str {
    match aqi {
        a if a <= 50.0 => "Good",
        a if a <= 100.0 => "Moderate",
        a if a <= 150.0 => "Unhealthy for sensitive groups",
        a if a <= 200.0 => "Unhealthy",
        a if a <= 300.0 => "Very unhealthy",
        _ => "Hazardous",
    }
}
