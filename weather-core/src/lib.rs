//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Forecast aggregation into daily summaries
//! - Weather alerts derived from current conditions
//! - The favorites store
//! - Parsing of OpenWeather payloads and the provider that fetches them
//! - Configuration & credentials handling
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod alerts;
pub mod config;
pub mod error;
pub mod favorites;
pub mod forecast;
pub mod model;
pub mod parse;
pub mod provider;
pub mod units;

pub use alerts::{Alert, compute_alerts};
pub use config::Config;
pub use error::{FavoritesError, ParseError};
pub use favorites::{AddOutcome, FavoritesStore};
pub use forecast::{MAX_FORECAST_DAYS, aggregate};
pub use model::{CurrentWeather, DaySummary, RawSample, UNKNOWN_DESCRIPTION};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
