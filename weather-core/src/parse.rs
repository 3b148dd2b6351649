//! Parsers for the OpenWeather `weather` and `forecast` payloads.
//!
//! Optional fields fall back to defaults. A field that is present with the
//! wrong type is an error rather than a silent default.

use chrono::DateTime;
use serde_json::{Map, Value};
use tracing::warn;

use crate::{
    error::ParseError,
    model::{CurrentWeather, RawSample},
    units::{kelvin_to_celsius, mps_to_kmh},
};

type Object = Map<String, Value>;

pub fn parse_current(raw: &str) -> Result<CurrentWeather, ParseError> {
    let root = parse_root(raw)?;

    let main = match root.get("main") {
        None => return Err(ParseError::MissingField("main")),
        Some(Value::Object(main)) => main,
        Some(_) => return Err(ParseError::InvalidField("main")),
    };
    let weather = match root.get("weather") {
        None => return Err(ParseError::MissingField("weather")),
        Some(Value::Array(weather)) => weather,
        Some(_) => return Err(ParseError::InvalidField("weather")),
    };

    let wind_speed = match root.get("wind") {
        None => 0.0,
        Some(Value::Object(wind)) => number_or(wind, "speed", "wind.speed", 0.0)?,
        Some(_) => return Err(ParseError::InvalidField("wind")),
    };

    let humidity = match main.get("humidity") {
        None => 0,
        Some(v) => {
            let h = v.as_f64().ok_or(ParseError::InvalidField("main.humidity"))?;
            h.round().clamp(0.0, f64::from(u8::MAX)) as u8
        }
    };

    let description = match weather.first() {
        None => String::new(),
        Some(Value::Object(first)) => string_or(first, "description", "weather.description")?,
        Some(_) => return Err(ParseError::InvalidField("weather")),
    };

    let observed_at = match root.get("dt") {
        None => None,
        Some(v) => {
            let ts = v.as_i64().ok_or(ParseError::InvalidField("dt"))?;
            DateTime::from_timestamp(ts, 0)
        }
    };

    Ok(CurrentWeather {
        city: string_or(&root, "name", "name")?,
        description,
        temp_c: kelvin_to_celsius(number_or(main, "temp", "main.temp", 0.0)?),
        feels_like_c: kelvin_to_celsius(number_or(main, "feels_like", "main.feels_like", 0.0)?),
        humidity_pct: humidity,
        wind_kmh: mps_to_kmh(wind_speed),
        observed_at,
    })
}

/// Extract forecast samples in payload order.
///
/// Entries without a usable `dt_txt` or temperature are skipped.
pub fn parse_forecast(raw: &str) -> Result<Vec<RawSample>, ParseError> {
    let root = parse_root(raw)?;

    let list = match root.get("list") {
        None => return Err(ParseError::MissingField("list")),
        Some(Value::Array(list)) => list,
        Some(_) => return Err(ParseError::InvalidField("list")),
    };

    let samples = list
        .iter()
        .enumerate()
        .filter_map(|(idx, entry)| {
            let sample = forecast_sample(entry);
            if sample.is_none() {
                warn!(index = idx, "skipping forecast entry without timestamp or temperature");
            }
            sample
        })
        .collect();

    Ok(samples)
}

fn forecast_sample(entry: &Value) -> Option<RawSample> {
    let timestamp = entry.get("dt_txt")?.as_str()?;
    if timestamp.len() < 10 {
        return None;
    }

    let kelvin = entry.get("main")?.get("temp")?.as_f64()?;

    let description = entry
        .get("weather")
        .and_then(Value::as_array)
        .and_then(|w| w.first())
        .map(|first| {
            first
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        });

    Some(RawSample {
        timestamp: timestamp.to_string(),
        temp_c: kelvin_to_celsius(kelvin),
        description,
    })
}

fn parse_root(raw: &str) -> Result<Object, ParseError> {
    if raw.trim().is_empty() {
        return Err(ParseError::EmptyBody);
    }

    match serde_json::from_str::<Value>(raw)? {
        Value::Object(root) => Ok(root),
        _ => Err(ParseError::InvalidField("<root>")),
    }
}

fn number_or(
    obj: &Object,
    key: &str,
    path: &'static str,
    default: f64,
) -> Result<f64, ParseError> {
    match obj.get(key) {
        None => Ok(default),
        Some(v) => v.as_f64().ok_or(ParseError::InvalidField(path)),
    }
}

fn string_or(obj: &Object, key: &str, path: &'static str) -> Result<String, ParseError> {
    match obj.get(key) {
        None => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ParseError::InvalidField(path)),
    }
}
