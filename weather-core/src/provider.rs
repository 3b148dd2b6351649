use crate::{
    Config,
    error::ParseError,
    model::{CurrentWeather, DaySummary},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of current conditions and daily forecasts for a city.
///
/// Transport failures are folded into [`ParseError::EmptyBody`], so callers
/// only ever have to decide how to report "no usable data".
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, city: &str) -> Result<CurrentWeather, ParseError>;

    /// Daily summaries, ascending by date, at most five. May be empty.
    async fn forecast(&self, city: &str) -> Result<Vec<DaySummary>, ParseError>;
}

/// Construct the OpenWeather provider, preferring an explicitly supplied key
/// over the one stored in `config`.
pub fn provider_from_config(
    config: &Config,
    explicit_api_key: Option<&str>,
) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.resolve_api_key(explicit_api_key)?;
    Ok(Box::new(OpenWeatherProvider::new(api_key)?))
}
