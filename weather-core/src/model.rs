use chrono::{DateTime, Utc};
use serde::Serialize;

/// Description used for a day whose samples carry no usable hour.
pub const UNKNOWN_DESCRIPTION: &str = "—";

/// Current conditions for a single city, already converted to metric units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentWeather {
    pub city: String,
    pub description: String,
    pub temp_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_kmh: f64,
    pub observed_at: Option<DateTime<Utc>>,
}

/// One 3-hourly forecast entry.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSample {
    /// Provider timestamp in `YYYY-MM-DD HH:MM:SS` form.
    pub timestamp: String,
    pub temp_c: f64,
    /// `None` when the entry had no weather conditions at all.
    pub description: Option<String>,
}

impl RawSample {
    pub fn new(
        timestamp: impl Into<String>,
        temp_c: f64,
        description: Option<impl Into<String>>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            temp_c,
            description: description.map(Into::into),
        }
    }

    /// Calendar date part of the timestamp (`YYYY-MM-DD`).
    pub fn date(&self) -> Option<&str> {
        self.timestamp.get(..10)
    }

    /// Hour of day, if the timestamp has one.
    pub fn hour(&self) -> Option<i64> {
        self.timestamp.get(11..13)?.parse().ok()
    }
}

/// Aggregated forecast for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub date: String,
    pub min_c: f64,
    pub max_c: f64,
    pub description: String,
}
