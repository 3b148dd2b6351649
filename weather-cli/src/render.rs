//! Human-readable output.

use weather_core::{Alert, CurrentWeather, DaySummary};

const ALERT_SEPARATOR: &str = " | ";

pub fn current_weather(cw: &CurrentWeather, alerts: &[Alert]) -> String {
    let mut out = format!(
        "=== Current Weather: {} ===\n\
         Condition : {}\n\
         Temp : {:.1}°C (feels {:.1}°C)\n\
         Humidity : {}%\n\
         Wind : {:.1} km/h\n",
        cw.city, cw.description, cw.temp_c, cw.feels_like_c, cw.humidity_pct, cw.wind_kmh,
    );

    if let Some(at) = cw.observed_at {
        out.push_str(&format!("Updated : {}\n", at.format("%Y-%m-%d %H:%M UTC")));
    }
    if !alerts.is_empty() {
        out.push_str(&format!("Alerts : {}\n", alert_line(alerts)));
    }

    out
}

pub fn alert_line(alerts: &[Alert]) -> String {
    alerts
        .iter()
        .map(Alert::message)
        .collect::<Vec<_>>()
        .join(ALERT_SEPARATOR)
}

pub fn forecast(city: &str, days: &[DaySummary]) -> String {
    if days.is_empty() {
        return "No forecast data.\n".to_string();
    }

    let mut out = format!("=== 5-Day Forecast: {city} ===\n");
    for day in days {
        out.push_str(&format!(
            "{} : {:.1}°C — {:.1}°C, {}\n",
            day.date, day.min_c, day.max_c, day.description
        ));
    }
    out
}

/// One row of the favorites overview; `None` means the fetch failed.
pub fn favorite_line(city: &str, weather: Option<&CurrentWeather>) -> String {
    match weather {
        Some(cw) => format!("- {city:<18} {:.1}°C, {}", cw.temp_c, cw.description),
        None => format!("- {city} : (fetch failed)"),
    }
}

pub fn favorites_list(cities: &[String]) -> String {
    if cities.is_empty() {
        return "No favorites yet. Add some from Current Weather.\n".to_string();
    }

    let mut out = String::from("=== Favorite Cities ===\n");
    for city in cities {
        out.push_str(&format!("- {city}\n"));
    }
    out
}
