use serde::Serialize;
use std::fmt;

pub const HEATWAVE_THRESHOLD_C: f64 = 40.0;
pub const COLDWAVE_THRESHOLD_C: f64 = 5.0;

const RAIN_KEYWORDS: &[&str] = &["rain", "drizzle", "thunder"];

/// Advisory derived from current conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alert {
    Heatwave,
    Coldwave,
    RainWarning,
}

impl Alert {
    pub fn message(&self) -> &'static str {
        match self {
            Alert::Heatwave => "🔥 Heatwave Alert",
            Alert::Coldwave => "❄️ Coldwave Alert",
            Alert::RainWarning => "☔ Rain Alert — carry an umbrella",
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Temperature alerts come first, then the rain warning.
pub fn compute_alerts(temp_c: f64, description: &str) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if temp_c >= HEATWAVE_THRESHOLD_C {
        alerts.push(Alert::Heatwave);
    }
    if temp_c <= COLDWAVE_THRESHOLD_C {
        alerts.push(Alert::Coldwave);
    }

    let lower = description.to_lowercase();
    if RAIN_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        alerts.push(Alert::RainWarning);
    }

    alerts
}
